//! # Seed Catalog Generator
//!
//! Produces a demo catalog document for local development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default)
//! cargo run -p glow-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p glow-store --bin seed -- --count 200
//!
//! # Specify output path
//! cargo run -p glow-store --bin seed -- --out ./data/catalog.json
//! ```
//!
//! ## Generated Products
//! Creates realistic beauty/wellness products across the storefront's
//! categories (Serum, Toner, Face Mask, ...). Each product has:
//! - Unique id: `{category-slug}-{index}`
//! - Name built from a per-category table
//! - Random price: $2.99 - $49.99
//! - A regular (list) price on roughly 4 in 10 products
//! - One or two category labels

use rand::Rng;

use glow_core::validation::validate_product;
use glow_core::Product;

/// Product name tables per category, matching the storefront's category
/// grid.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Serum",
        &[
            "Rose Serum",
            "Vitamin C Serum",
            "Hyaluronic Serum",
            "Niacinamide Serum",
            "Retinol Night Serum",
            "Peptide Firming Serum",
        ],
    ),
    (
        "Toner",
        &[
            "Ocean Toner",
            "Rose Water Toner",
            "Green Tea Toner",
            "AHA Exfoliating Toner",
            "Cucumber Mist Toner",
        ],
    ),
    (
        "Face Mask",
        &[
            "Clay Purifying Mask",
            "Sheet Mask Aloe",
            "Overnight Sleeping Mask",
            "Charcoal Peel Mask",
        ],
    ),
    (
        "Cream & Moisturizers",
        &[
            "Night Cream",
            "Day Moisturizer SPF",
            "Ceramide Barrier Cream",
            "Shea Body Butter",
        ],
    ),
    (
        "Facewash & Cleanser",
        &[
            "Foaming Facewash",
            "Oil Cleanser",
            "Gentle Milk Cleanser",
            "Salicylic Acid Cleanser",
        ],
    ),
    (
        "Sunscreen",
        &["Mineral Sunscreen SPF50", "Invisible Gel Sunscreen", "Tinted Sunscreen"],
    ),
    (
        "Hair Care",
        &["Argan Hair Oil", "Keratin Shampoo", "Scalp Scrub", "Leave-In Conditioner"],
    ),
    (
        "Lip Care",
        &["Tinted Lip Balm", "Overnight Lip Mask", "Sugar Lip Scrub"],
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let mut count: usize = 60;
    let mut out_path = String::from("./catalog.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Glow Storefront Seed Catalog Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -o, --out <PATH>   Output file path (default: ./catalog.json)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Glow Storefront Seed Catalog Generator");
    println!("=========================================");
    println!("Output:   {}", out_path);
    println!("Products: {}", count);
    println!();

    let mut rng = rand::rng();
    let mut products = Vec::with_capacity(count);

    'outer: loop {
        for (label, names) in CATEGORIES {
            for name in *names {
                if products.len() >= count {
                    break 'outer;
                }
                products.push(generate_product(label, name, products.len(), &mut rng));
            }
        }
    }

    // Hygiene check before the document leaves the tool
    for product in &products {
        validate_product(product)?;
    }

    let payload = serde_json::to_string_pretty(&products)?;
    std::fs::write(&out_path, payload)?;

    println!("✓ Wrote {} products to {}", products.len(), out_path);
    Ok(())
}

/// Generates a single product with realistic data.
fn generate_product<R: Rng>(label: &str, name: &str, index: usize, rng: &mut R) -> Product {
    let slug: String = label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    let price_cents = rng.random_range(299..=4999);

    // Roughly 4 in 10 products carry a list price 10-60% above the
    // selling price
    let regular_price_cents = if rng.random_bool(0.4) {
        Some(price_cents + rng.random_range(price_cents / 10..=price_cents * 3 / 5).max(1))
    } else {
        None
    };

    // A few products cross-list into a second category
    let mut categories = vec![label.to_string()];
    if rng.random_bool(0.15) {
        let (other, _) = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
        if other != label {
            categories.push(other.to_string());
        }
    }

    Product {
        id: format!("{}-{}", slug, index),
        name: name.to_string(),
        description: format!("{} from the Glow {} collection.", name, label),
        price_cents,
        regular_price_cents,
        photo_url: format!("https://cdn.glow.example/products/{}-{}.webp", slug, index),
        categories,
    }
}
