//! # IR Optimizer
//!
//! The renderer sets colours and fonts before every block without tracking
//! what is already active. This pass drops style ops that do not change
//! the current state, and style ops that are overwritten before anything
//! is drawn.
//!
//! ## Optimization Passes
//!
//! 1. **Remove redundant styles**: Don't emit SetFont(Bold, 10) if already Bold 10
//! 2. **Remove dead styles**: A style op immediately overwritten by the same kind

use super::ops::{Document, Op, Page, StyleState};

impl Page {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = self.ops;
        let ops = remove_dead_styles(ops);
        let ops = remove_redundant_styles(ops);
        Page { ops }
    }
}

impl Document {
    /// Optimize every page.
    pub fn optimize(self) -> Self {
        Document {
            pages: self.pages.into_iter().map(Page::optimize).collect(),
            watermark: self.watermark,
        }
    }
}

/// Same-kind style ops in a run with no drawing in between: only the last
/// one matters.
fn remove_dead_styles(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());

    for op in ops {
        if op.is_style() {
            // Look back through the current run of style ops only
            let run_start = result
                .iter()
                .rposition(|o| !o.is_style())
                .map(|i| i + 1)
                .unwrap_or(0);
            if let Some(pos) = result[run_start..]
                .iter()
                .position(|o| std::mem::discriminant(o) == std::mem::discriminant(&op))
            {
                result.remove(run_start + pos);
            }
        }
        result.push(op);
    }

    result
}

/// Remove style changes that don't change the current state.
fn remove_redundant_styles(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut state = StyleState::default();

    for op in ops {
        match &op {
            Op::SetFillColor(c) => {
                if *c != state.fill {
                    state.fill = *c;
                    result.push(op);
                }
            }
            Op::SetStrokeColor(c) => {
                if *c != state.stroke {
                    state.stroke = *c;
                    result.push(op);
                }
            }
            Op::SetTextColor(c) => {
                if *c != state.text {
                    state.text = *c;
                    result.push(op);
                }
            }
            Op::SetLineWidth(w) => {
                if *w != state.line_width {
                    state.line_width = *w;
                    result.push(op);
                }
            }
            Op::SetFont { weight, size } => {
                if *weight != state.weight || *size != state.size {
                    state.weight = *weight;
                    state.size = *size;
                    result.push(op);
                }
            }
            _ => result.push(op),
        }
    }

    result
}
