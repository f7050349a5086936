// =============================================================================
// SEED DATA MODULE
// =============================================================================
// The fixed in-memory catalog behind the product data provider. Twelve
// instruments, ids "1" through "12"; the data never changes during a session.
// =============================================================================

use crate::models::{Product, ProductCategory, ProductSpecs};

/// Build the seed catalog. `asset_base_path` is prepended to every image
/// path (empty string leaves paths as-is).
pub fn seed_products(asset_base_path: &str) -> Vec<Product> {
    let image = |path: &str| format!("{asset_base_path}{path}");

    vec![
        Product {
            id: "1".to_string(),
            name: "CORT G110 Open Pore Black Cherry".to_string(),
            brand: "Cort".to_string(),
            model: "G110".to_string(),
            price: 299.0,
            description: "The Cort G110 electric guitar features a comfortable body shape with \
                          excellent playability. Open Pore Black Cherry finish gives it a modern, \
                          sophisticated look while maintaining the natural feel of the wood."
                .to_string(),
            image_url: image("/images/guitars/cort.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Basswood".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Rosewood".to_string(),
                pickups: Some("2 Humbuckers".to_string()),
                strings: 6,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 4.3,
            reviews_count: 87,
        },
        Product {
            id: "2".to_string(),
            name: "CORT KX300 Raw Burst".to_string(),
            brand: "Cort".to_string(),
            model: "KX300".to_string(),
            price: 449.0,
            description: "The Cort KX300 offers exceptional value with professional features. \
                          Raw Burst finish showcases beautiful wood grain patterns while \
                          delivering powerful tone and sustain."
                .to_string(),
            image_url: image("/images/guitars/cort_kx300.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Mahogany".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Rosewood".to_string(),
                pickups: Some("2 Humbuckers".to_string()),
                strings: 6,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 4.5,
            reviews_count: 134,
        },
        Product {
            id: "3".to_string(),
            name: "IBANEZ GRX70QA TRB".to_string(),
            brand: "Ibanez".to_string(),
            model: "GRX70QA".to_string(),
            price: 279.0,
            description: "The Ibanez GRX70QA features quilted maple art grain top with \
                          transparent red burst finish. Perfect for beginners and intermediate \
                          players seeking quality and style."
                .to_string(),
            image_url: image("/images/guitars/ibanez.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Poplar with Quilted Maple Art Grain top".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Purpleheart".to_string(),
                pickups: Some("2 Infinity R + 1 Infinity RS".to_string()),
                strings: 6,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 4.4,
            reviews_count: 203,
        },
        Product {
            id: "4".to_string(),
            name: "IBANEZ GRG7221QA TKS".to_string(),
            brand: "Ibanez".to_string(),
            model: "GRG7221QA".to_string(),
            price: 399.0,
            description: "7-string electric guitar with quilted maple art grain top. The \
                          GRG7221QA delivers extended range for modern metal and progressive \
                          styles with exceptional playability."
                .to_string(),
            image_url: image("/images/guitars/ibanez_tks.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Poplar with Quilted Maple Art Grain top".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Purpleheart".to_string(),
                pickups: Some("2 Infinity R7 Humbuckers".to_string()),
                strings: 7,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 4.6,
            reviews_count: 156,
        },
        Product {
            id: "5".to_string(),
            name: "JACKSON JS12 AR Metallic Blue".to_string(),
            brand: "Jackson".to_string(),
            model: "JS12".to_string(),
            price: 199.0,
            description: "The Jackson JS12 Dinky features a striking metallic blue finish with \
                          classic Jackson styling. Great entry-level guitar with authentic \
                          Jackson DNA and aggressive tone."
                .to_string(),
            image_url: image("/images/guitars/jackson.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Poplar".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Amaranth".to_string(),
                pickups: Some("2 Jackson High-Output Humbuckers".to_string()),
                strings: 6,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 4.2,
            reviews_count: 89,
        },
        Product {
            id: "6".to_string(),
            name: "Jay Turser JT30 MRD".to_string(),
            brand: "Jay Turser".to_string(),
            model: "JT30".to_string(),
            price: 159.0,
            description: "The Jay Turser JT30 in metallic red delivers classic electric guitar \
                          tone at an affordable price. Perfect for students and budget-conscious \
                          musicians."
                .to_string(),
            image_url: image("/images/guitars/jay_turser.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Basswood".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Rosewood".to_string(),
                pickups: Some("3 Single-Coil".to_string()),
                strings: 6,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 4.0,
            reviews_count: 67,
        },
        Product {
            id: "7".to_string(),
            name: "PARKSONS ST-40 3-Tone Sunburst".to_string(),
            brand: "Parksons".to_string(),
            model: "ST-40".to_string(),
            price: 129.0,
            description: "The Parksons ST-40 features classic 3-tone sunburst finish with \
                          traditional styling. An excellent choice for beginners looking for \
                          authentic electric guitar experience."
                .to_string(),
            image_url: image("/images/guitars/parkons.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Basswood".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Rosewood".to_string(),
                pickups: Some("3 Single-Coil".to_string()),
                strings: 6,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 3.9,
            reviews_count: 45,
        },
        Product {
            id: "8".to_string(),
            name: "YAMAHA PACIFICA 112J L".to_string(),
            brand: "Yamaha".to_string(),
            model: "PACIFICA 112J".to_string(),
            price: 349.0,
            description: "The Yamaha Pacifica 112J Left-handed version delivers legendary Yamaha \
                          quality and tone. Features HSS pickup configuration for versatile \
                          sound options."
                .to_string(),
            image_url: image("/images/guitars/yamaha.png"),
            category: ProductCategory::Electric,
            specifications: ProductSpecs {
                body_material: "Alder".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Rosewood".to_string(),
                pickups: Some("1 Humbucker + 2 Single-Coil".to_string()),
                strings: 6,
                scale: "25.5\"".to_string(),
            },
            in_stock: true,
            rating: 4.7,
            reviews_count: 298,
        },
        Product {
            id: "9".to_string(),
            name: "Martin D-28 Standard Series".to_string(),
            brand: "Martin".to_string(),
            model: "D-28".to_string(),
            price: 3199.0,
            description: "The Martin D-28 is the cornerstone of the Martin line. The bold, \
                          booming voice of the D-28 can be heard on countless recordings by the \
                          biggest names in music."
                .to_string(),
            image_url: image("/images/guitars/Martin D-28.png"),
            category: ProductCategory::Acoustic,
            specifications: ProductSpecs {
                body_material: "East Indian Rosewood Back and Sides, Sitka Spruce Top".to_string(),
                neck_material: "Select Hardwood".to_string(),
                fingerboard: "East Indian Rosewood".to_string(),
                pickups: None,
                strings: 6,
                scale: "25.4\"".to_string(),
            },
            in_stock: true,
            rating: 4.9,
            reviews_count: 156,
        },
        Product {
            id: "10".to_string(),
            name: "Fender Player Precision Bass".to_string(),
            brand: "Fender".to_string(),
            model: "Player Precision Bass".to_string(),
            price: 879.0,
            description: "The inspiring sound of a Precision Bass is one of the foundations of \
                          Fender. Featuring the classic split-coil pickup design."
                .to_string(),
            image_url: image("/images/guitars/bas-gitara-fender-player-precision-bass.png"),
            category: ProductCategory::Bass,
            specifications: ProductSpecs {
                body_material: "Alder".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Pau Ferro".to_string(),
                pickups: Some("Player Series Split Single-Coil Precision Bass".to_string()),
                strings: 4,
                scale: "34\"".to_string(),
            },
            in_stock: true,
            rating: 4.7,
            reviews_count: 234,
        },
        Product {
            id: "11".to_string(),
            name: "Yamaha C40 Classical Guitar".to_string(),
            brand: "Yamaha".to_string(),
            model: "C40".to_string(),
            price: 149.0,
            description: "The C40 features a spruce top with meranti back and sides that deliver \
                          a bright, clear tone perfect for classical playing."
                .to_string(),
            image_url: image("/images/guitars/c40-II-main-yamaha.png"),
            category: ProductCategory::Classical,
            specifications: ProductSpecs {
                body_material: "Meranti Back/Sides, Spruce Top".to_string(),
                neck_material: "Nato".to_string(),
                fingerboard: "Rosewood".to_string(),
                pickups: None,
                strings: 6,
                scale: "25.6\"".to_string(),
            },
            in_stock: true,
            rating: 4.3,
            reviews_count: 1247,
        },
        Product {
            id: "12".to_string(),
            name: "Music Man StingRay Bass".to_string(),
            brand: "Music Man".to_string(),
            model: "StingRay".to_string(),
            price: 2199.0,
            description: "The Music Man StingRay bass is an icon in the bass world, known for \
                          its distinctive tone and high-quality construction."
                .to_string(),
            image_url: image("/images/guitars/MusicmanStingray.png"),
            category: ProductCategory::Bass,
            specifications: ProductSpecs {
                body_material: "Ash".to_string(),
                neck_material: "Maple".to_string(),
                fingerboard: "Maple".to_string(),
                pickups: Some("Music Man Humbucker".to_string()),
                strings: 4,
                scale: "34\"".to_string(),
            },
            in_stock: false,
            rating: 4.8,
            reviews_count: 92,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_twelve_products_with_unique_ids() {
        let products = seed_products("");
        assert_eq!(products.len(), 12);

        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn seed_prices_and_ratings_are_in_range() {
        for product in seed_products("") {
            assert!(product.price >= 0.0, "negative price on {}", product.id);
            assert!(
                (0.0..=5.0).contains(&product.rating),
                "rating out of range on {}",
                product.id
            );
        }
    }

    #[test]
    fn asset_base_path_prefixes_image_urls() {
        let products = seed_products("https://cdn.example.com");
        assert!(products
            .iter()
            .all(|p| p.image_url.starts_with("https://cdn.example.com/images/guitars/")));
    }
}
