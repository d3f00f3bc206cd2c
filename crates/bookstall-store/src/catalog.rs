//! # Product Catalog
//!
//! Static in-memory catalog, rebuilt at load time from the seed
//! collections.
//!
//! ## How the Catalog Is Assembled
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Assembly                                 │
//! │                                                                     │
//! │  latest titles ──────┐                                              │
//! │  forthcoming titles ─┤   per collection:                            │
//! │  pride collection ───┼─► id = "<prefix>-<n>"                        │
//! │  non-fiction ────────┘   slug = slugify(title)                      │
//! │                                │                                    │
//! │                                ▼                                    │
//! │                   one addressable product list                      │
//! │                                                                     │
//! │  Queries: list / by_id / by_slug; a miss is None, never an error.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The queries are async so a real backend (database, commerce API)
//! could slot in without changing callers; here they answer from
//! memory.

use tracing::debug;

use bookstall_core::types::{slugify, Product};

/// One seed record before id/slug synthesis.
struct SeedBook {
    title: &'static str,
    author: &'static str,
    price_minor: i64,
    rating: u8,
    category: &'static str,
    image: &'static str,
}

/// The read-only product catalog.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = Catalog::load();
///
/// let all = catalog.list().await;
/// let book = catalog.by_slug("safe-house").await;
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds the catalog from the seed collections, synthesizing
    /// unique ids and slugs.
    pub fn load() -> Self {
        let collections: [(&str, Vec<SeedBook>); 4] = [
            ("latest", latest_titles()),
            ("forthcoming", forthcoming_titles()),
            ("pride", pride_collection()),
            ("nonfiction", non_fiction()),
        ];

        let mut products = Vec::new();
        for (prefix, seeds) in collections {
            for (index, seed) in seeds.into_iter().enumerate() {
                products.push(Product {
                    id: format!("{}-{}", prefix, index + 1),
                    slug: slugify(seed.title),
                    title: seed.title.to_string(),
                    author: seed.author.to_string(),
                    price_minor: seed.price_minor,
                    rating: Some(seed.rating),
                    category: Some(seed.category.to_string()),
                    description: None,
                    image: seed.image.to_string(),
                });
            }
        }

        debug!(count = products.len(), "Catalog loaded");
        Catalog { products }
    }

    /// Returns all products in catalog order.
    pub async fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Finds a product by id. Returns `None` if absent.
    pub async fn by_id(&self, id: &str) -> Option<Product> {
        debug!(id = %id, "Catalog lookup by id");
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Finds a product by slug. Returns `None` if absent.
    pub async fn by_slug(&self, slug: &str) -> Option<Product> {
        debug!(slug = %slug, "Catalog lookup by slug");
        self.products.iter().find(|p| p.slug == slug).cloned()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::load()
    }
}

// =============================================================================
// Seed Collections
// =============================================================================

fn latest_titles() -> Vec<SeedBook> {
    vec![
        SeedBook {
            title: "Midnight in the Morgue",
            author: "Chika Unigwe",
            price_minor: 1_000_000,
            rating: 4,
            category: "Fiction",
            image: "/Chika.jpeg",
        },
        SeedBook {
            title: "Flying Up The Mountain",
            author: "Elizabeth Irene Baitie",
            price_minor: 500_000,
            rating: 5,
            category: "Fiction",
            image: "/Elizabeth.jpg",
        },
        SeedBook {
            title: "On Ladies and Handbags",
            author: "Mylo FreeMan",
            price_minor: 1_400_000,
            rating: 3,
            category: "Fiction",
            image: "/Mylo.jpg",
        },
        SeedBook {
            title: "The World Was In Our Hands",
            author: "Chitra Nagarajan",
            price_minor: 1_700_000,
            rating: 4,
            category: "Fiction",
            image: "/Chitra Nagarajan.png",
        },
    ]
}

fn forthcoming_titles() -> Vec<SeedBook> {
    vec![
        SeedBook {
            title: "A Pair of Wing",
            author: "Carole Hopson",
            price_minor: 1_000_000,
            rating: 4,
            category: "Fiction",
            image: "/Carole-Hopson.jpg",
        },
        SeedBook {
            title: "The Mercy Steps",
            author: "Marcia Hutchinson",
            price_minor: 1_300_000,
            rating: 5,
            category: "Fiction",
            image: "/marcia.jpeg",
        },
        SeedBook {
            title: "Hassan and Hassana Share Everything",
            author: "Chinyere",
            price_minor: 450_000,
            rating: 4,
            category: "Fiction",
            image: "/Chinyere.jpeg",
        },
        SeedBook {
            title: "Henrietta Lacks: The Mother of Modern Medicine",
            author: "Henrietta",
            price_minor: 300_000,
            rating: 3,
            category: "Fiction",
            image: "/Henrietta.png",
        },
    ]
}

fn pride_collection() -> Vec<SeedBook> {
    vec![
        SeedBook {
            title: "Bundle: When we speak of nothing & And then He sang a lullaby",
            author: "Ani Kayode",
            price_minor: 1_450_000,
            rating: 5,
            category: "Fiction",
            image: "/Ani.png",
        },
        SeedBook {
            title: "Love offers no safety & She called me a woman",
            author: "Makanjuola",
            price_minor: 1_450_000,
            rating: 4,
            category: "Fiction",
            image: "/makanjuola.png",
        },
        SeedBook {
            title: "Wild Imperfections",
            author: "Natalia",
            price_minor: 1_400_000,
            rating: 4,
            category: "Fiction",
            image: "/natalia.jpg",
        },
        SeedBook {
            title: "And then he sang a lullaby",
            author: "Ani Kayode",
            price_minor: 1_100_000,
            rating: 5,
            category: "Fiction",
            image: "/ani 2.jpg",
        },
    ]
}

fn non_fiction() -> Vec<SeedBook> {
    vec![
        SeedBook {
            title: "A Stranger Pose",
            author: "Emmanuel Iduma",
            price_minor: 700_000,
            rating: 4,
            category: "Non-fiction",
            image: "/emmanuel-iduma.jpg",
        },
        SeedBook {
            title: "Soldiers of Fortune",
            author: "Max Siollun",
            price_minor: 1_200_000,
            rating: 4,
            category: "Non-fiction",
            image: "/max siollun.jpeg",
        },
        SeedBook {
            title: "Lagos: City of Imagination",
            author: "Kaye Whiteman",
            price_minor: 1_400_000,
            rating: 5,
            category: "Non-fiction",
            image: "/kaye whiteman.jpg",
        },
        SeedBook {
            title: "Safe House",
            author: "Ellah Allfrey",
            price_minor: 500_000,
            rating: 3,
            category: "Non-fiction",
            image: "/ellah allfrey.jpg",
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
