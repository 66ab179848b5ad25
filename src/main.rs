//! # Autobill CLI
//!
//! Command-line interface for generating shop invoices.
//!
//! ## Usage
//!
//! ```bash
//! # Generate a bill from a form file (assigns the next bill number)
//! autobill generate bill.json
//!
//! # With a shop profile and logo watermark, then open a WhatsApp share link
//! autobill generate bill.json --shop shop.json --logo logo.png --share
//!
//! # Show the next bill number
//! autobill next-number
//!
//! # Open the folder of saved bills
//! autobill open-folder
//!
//! # Quick checks
//! autobill words 12345
//! autobill tax 400
//! autobill plan 46
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use autobill::{
    BillError,
    counter::BillCounter,
    invoice::{BillForm, tax, words},
    layout,
    output,
    render::{InvoiceRenderer, Watermark},
    share,
    shop::ShopProfile,
};

/// Autobill - GST invoice generator
#[derive(Parser, Debug)]
#[command(name = "autobill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a PDF invoice from a bill form
    Generate {
        /// Bill form JSON file
        form: PathBuf,

        /// Shop profile JSON file
        #[arg(long, value_name = "FILE")]
        shop: Option<PathBuf>,

        /// Logo image drawn as a watermark behind every page
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Directory to save the PDF in
        #[arg(long, default_value = output::DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,

        /// Bill counter file
        #[arg(long, default_value = BillCounter::DEFAULT_FILE)]
        counter: PathBuf,

        /// Open a WhatsApp share link after saving
        #[arg(long)]
        share: bool,
    },

    /// Print the next bill number
    NextNumber {
        /// Bill counter file
        #[arg(long, default_value = BillCounter::DEFAULT_FILE)]
        counter: PathBuf,
    },

    /// Open the folder saved bills are written to
    OpenFolder {
        /// Bills directory, created if missing
        #[arg(long, default_value = output::DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,
    },

    /// Spell an amount in words (Indian numbering)
    Words {
        amount: f64,
    },

    /// Split a GST-inclusive total into basic, SGST and CGST
    Tax {
        total: f64,

        /// Combined GST rate as a fraction
        #[arg(long, default_value_t = tax::DEFAULT_GST_RATE)]
        rate: f64,
    },

    /// Show how many items land on each page
    Plan {
        count: usize,

        /// Shop profile JSON file (for its layout section)
        #[arg(long, value_name = "FILE")]
        shop: Option<PathBuf>,
    },

    /// Print the WhatsApp share link for a bill form
    Share {
        /// Bill form JSON file
        form: PathBuf,

        /// Bill number to quote
        #[arg(long)]
        bill_number: u64,

        /// Shop profile JSON file
        #[arg(long, value_name = "FILE")]
        shop: Option<PathBuf>,

        /// Open the link in the browser instead of printing it
        #[arg(long)]
        open: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BillError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            form,
            shop,
            logo,
            out_dir,
            counter,
            share: open_share,
        } => {
            let shop = load_shop(shop.as_deref())?;
            let form = load_form(&form)?;
            let counter = BillCounter::new(counter);

            let bill_number = match form.bill_number {
                Some(n) => n,
                None => counter.next()?,
            };
            let invoice = form.prepare(bill_number, shop.gst_rate)?;

            let watermark = logo
                .map(|path| Watermark::load(&path, shop.watermark_opacity))
                .transpose()?;

            let renderer = InvoiceRenderer::new(&shop, &invoice).with_watermark(watermark);
            let doc = renderer.render()?;
            let title = format!("Invoice {}", bill_number);
            let pdf = doc.optimize().to_pdf_with_config(&title, renderer.config())?;

            let path = output::save_pdf(&out_dir, &invoice.header, &pdf)?;
            counter.save(bill_number)?;

            println!("Saved {}", path.display());
            println!("Total: {} ({})", invoice.header.grand_total, invoice.header.amount_in_words);

            if open_share {
                let text = share::summary_text(&shop, &invoice.header, &invoice.items);
                let url = share::whatsapp_link(&shop.country_code, &invoice.header.customer_phone, &text);
                share::open_link(&url)?;
            }
        }

        Commands::NextNumber { counter } => {
            println!("{}", BillCounter::new(counter).next()?);
        }

        Commands::OpenFolder { out_dir } => {
            let dir = output::open_folder(&out_dir)?;
            println!("Opened {}", dir.display());
        }

        Commands::Words { amount } => {
            println!("{}", words::amount_to_words(amount));
        }

        Commands::Tax { total, rate } => {
            let split = tax::split_inclusive_total(tax::round2(total), rate);
            let half = tax::half_rate_label(rate);
            println!("Basic:     {:>12.2}", split.basic);
            println!("SGST {:<5} {:>12.2}", half, split.sgst);
            println!("CGST {:<5} {:>12.2}", half, split.cgst);
            println!("Total:     {:>12.2}", tax::round2(total));
        }

        Commands::Plan { count, shop } => {
            let config = load_shop(shop.as_deref())?.page_config();
            config.validate()?;
            let slices = layout::plan_for(count, &config);
            println!("{} items -> {} page(s) per copy", count, slices.len());
            for (i, slice) in slices.iter().enumerate() {
                if slice.len == 0 {
                    println!("  page {}: no items", i + 1);
                } else {
                    println!(
                        "  page {}: items {}-{} ({})",
                        i + 1,
                        slice.start + 1,
                        slice.end(),
                        slice.len
                    );
                }
            }
        }

        Commands::Share {
            form,
            bill_number,
            shop,
            open,
        } => {
            let shop = load_shop(shop.as_deref())?;
            let invoice = load_form(&form)?.prepare(bill_number, shop.gst_rate)?;
            let text = share::summary_text(&shop, &invoice.header, &invoice.items);
            let url = share::whatsapp_link(&shop.country_code, &invoice.header.customer_phone, &text);
            if open {
                share::open_link(&url)?;
            } else {
                println!("{}", url);
            }
        }
    }

    Ok(())
}

fn load_shop(path: Option<&Path>) -> Result<ShopProfile, BillError> {
    match path {
        Some(path) => {
            let shop = ShopProfile::load(path)?;
            info!(path = %path.display(), business = %shop.business_name, "Loaded shop profile");
            Ok(shop)
        }
        None => Ok(ShopProfile::default()),
    }
}

fn load_form(path: &Path) -> Result<BillForm, BillError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
