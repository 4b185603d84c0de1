//! Fixed catalog seed data and idempotent seeding.
//!
//! Each table is populated with a single
//! `INSERT ... SELECT ... WHERE NOT EXISTS` statement, so there is no
//! window between checking for existing rows and inserting. Repeated
//! or concurrent calls are safe; unique names with
//! `ON CONFLICT DO NOTHING` cover the remaining overlap.

use sqlx::{PgPool, QueryBuilder};

/// A trip type to seed.
struct SeedTripType {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
}

/// A catalog packing item to seed.
struct SeedPackingItem {
    name: &'static str,
    category: &'static str,
    trip_types: &'static [&'static str],
    is_essential: bool,
}

const TRIP_TYPES: &[SeedTripType] = &[
    SeedTripType {
        name: "beach",
        description: "Beach vacation",
        icon: "umbrella-beach",
    },
    SeedTripType {
        name: "hike",
        description: "Hiking trip",
        icon: "mountain",
    },
    SeedTripType {
        name: "work",
        description: "Business trip",
        icon: "briefcase",
    },
];

const PACKING_ITEMS: &[SeedPackingItem] = &[
    // Essentials for all trips
    SeedPackingItem {
        name: "Passport/ID",
        category: "Documents",
        trip_types: &["beach", "hike", "work"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Phone charger",
        category: "Electronics",
        trip_types: &["beach", "hike", "work"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Toothbrush",
        category: "Toiletries",
        trip_types: &["beach", "hike", "work"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Toothpaste",
        category: "Toiletries",
        trip_types: &["beach", "hike", "work"],
        is_essential: true,
    },
    // Beach specific
    SeedPackingItem {
        name: "Swimsuit",
        category: "Clothing",
        trip_types: &["beach"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Sunscreen",
        category: "Toiletries",
        trip_types: &["beach", "hike"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Beach towel",
        category: "Accessories",
        trip_types: &["beach"],
        is_essential: false,
    },
    SeedPackingItem {
        name: "Flip flops",
        category: "Footwear",
        trip_types: &["beach"],
        is_essential: false,
    },
    // Hiking specific
    SeedPackingItem {
        name: "Hiking boots",
        category: "Footwear",
        trip_types: &["hike"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Water bottle",
        category: "Accessories",
        trip_types: &["hike", "beach"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "First aid kit",
        category: "Health",
        trip_types: &["hike"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Backpack",
        category: "Accessories",
        trip_types: &["hike"],
        is_essential: true,
    },
    // Work specific
    SeedPackingItem {
        name: "Laptop",
        category: "Electronics",
        trip_types: &["work"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Business attire",
        category: "Clothing",
        trip_types: &["work"],
        is_essential: true,
    },
    SeedPackingItem {
        name: "Notebook",
        category: "Accessories",
        trip_types: &["work"],
        is_essential: false,
    },
    SeedPackingItem {
        name: "Business cards",
        category: "Documents",
        trip_types: &["work"],
        is_essential: false,
    },
];

/// Rows inserted by a seeding pass. All zeros means the catalog was
/// already populated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOutcome {
    pub trip_types_inserted: u64,
    pub packing_items_inserted: u64,
}

impl SeedOutcome {
    pub fn already_seeded(&self) -> bool {
        self.trip_types_inserted == 0 && self.packing_items_inserted == 0
    }
}

/// Populate the catalog tables if they are empty. Idempotent.
pub async fn ensure_seeded(pool: &PgPool) -> Result<SeedOutcome, sqlx::Error> {
    let mut outcome = SeedOutcome::default();

    let mut builder: QueryBuilder<sqlx::Postgres> =
        QueryBuilder::new("INSERT INTO trip_types (name, description, icon) SELECT * FROM (");
    builder.push_values(TRIP_TYPES, |mut row, trip_type| {
        row.push_bind(trip_type.name)
            .push_bind(trip_type.description)
            .push_bind(trip_type.icon);
    });
    builder.push(
        ") AS seed(name, description, icon) \
         WHERE NOT EXISTS (SELECT 1 FROM trip_types) \
         ON CONFLICT (name) DO NOTHING",
    );
    outcome.trip_types_inserted = builder.build().execute(pool).await?.rows_affected();

    let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
        "INSERT INTO packing_items (name, category, trip_types, is_essential) SELECT * FROM (",
    );
    builder.push_values(PACKING_ITEMS, |mut row, item| {
        let trip_types: Vec<String> = item.trip_types.iter().map(|t| t.to_string()).collect();
        row.push_bind(item.name)
            .push_bind(item.category)
            .push_bind(trip_types)
            .push_bind(item.is_essential);
    });
    builder.push(
        ") AS seed(name, category, trip_types, is_essential) \
         WHERE NOT EXISTS (SELECT 1 FROM packing_items) \
         ON CONFLICT (name) DO NOTHING",
    );
    outcome.packing_items_inserted = builder.build().execute(pool).await?.rows_affected();

    if outcome.already_seeded() {
        tracing::debug!("Catalog already seeded");
    } else {
        tracing::info!(
            trip_types = outcome.trip_types_inserted,
            packing_items = outcome.packing_items_inserted,
            "Catalog seeded",
        );
    }

    Ok(outcome)
}
