//! # Seed Data Generator
//!
//! Populates the database with sample pharmacy master data for development.
//! The API itself never creates medicines or suppliers, so a fresh database
//! is unusable without this.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p apotek-db --bin seed
//!
//! # Specify database path
//! cargo run -p apotek-db --bin seed -- --db ./data/apotek.db
//! ```

use chrono::Utc;
use std::env;
use uuid::Uuid;

use apotek_core::{pricing, Medicine, Supplier};
use apotek_db::{Database, DbConfig};

/// Sample suppliers (Indonesian pharmaceutical distributors).
const SUPPLIERS: &[&str] = &[
    "PT Kimia Farma Trading & Distribution",
    "PT Enseval Putera Megatrading",
    "PT Bina San Prima",
    "PT Anugrah Pharmindo Lestari",
    "PT Mensa Bina Sukses",
];

/// Sample medicines: (name, HNA, margin %, opening stock).
const MEDICINES: &[(&str, f64, f64, i64)] = &[
    ("Paracetamol 500mg Tab", 1000.0, 10.0, 150),
    ("Amoxicillin 500mg Kaps", 1500.0, 15.0, 80),
    ("Cetirizine 10mg Tab", 800.0, 20.0, 60),
    ("Antasida Doen Tab", 500.0, 25.0, 90),
    ("OBH Combi Sirup 100ml", 9000.0, 12.0, 40),
    ("Vitamin C 500mg Tab", 400.0, 30.0, 200),
    ("Amlodipine 5mg Tab", 1200.0, 18.0, 70),
    ("Metformin 500mg Tab", 900.0, 15.0, 110),
    ("Omeprazole 20mg Kaps", 2000.0, 20.0, 50),
    ("Salbutamol 2mg Tab", 700.0, 22.0, 45),
    ("Ibuprofen 400mg Tab", 1100.0, 15.0, 65),
    ("Loratadine 10mg Tab", 950.0, 18.0, 55),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./apotek_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Apotek Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./apotek_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Apotek Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected, migrations applied");

    // Skip if already populated, to avoid duplicate master data
    let existing = db.medicines().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} medicines", existing);
        println!("  Skipping seed. Delete the database file to regenerate.");
        return Ok(());
    }

    let now = Utc::now();

    for name in SUPPLIERS {
        let supplier = Supplier {
            id: Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            created_at: now,
        };
        db.suppliers().insert(&supplier).await?;
    }
    println!("✓ Seeded {} suppliers", SUPPLIERS.len());

    for (name, hna, margin, stock) in MEDICINES {
        let medicine = Medicine {
            id: Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            hna_price: *hna,
            margin_percentage: *margin,
            // Opening price uses the same formula the processor applies on
            // every received line item
            selling_price: pricing::selling_price(*hna, *margin),
            stock: *stock,
            created_at: now,
            updated_at: now,
        };
        db.medicines().insert(&medicine).await?;
    }
    println!("✓ Seeded {} medicines", MEDICINES.len());

    println!();
    println!("✓ Seed complete!");
    Ok(())
}
