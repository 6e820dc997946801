//! Built-in demo catalog

use std::path::PathBuf;
use vitrine_core::{Catalog, Product, Result};

/// The two-product catalog the showcase ships with.
pub fn demo_catalog() -> Result<Catalog> {
    Catalog::new(vec![
        Product {
            id: 1,
            title: "Air Sneaker Pro".to_string(),
            description: "Lightweight performance sneaker with a breathable knit upper \
                          and responsive cushioning."
                .to_string(),
            price: "$149.99".to_string(),
            model_path: PathBuf::from("assets/models/red_sneakers/scene.gltf"),
        },
        Product {
            id: 2,
            title: "Sport Watch X".to_string(),
            description: "Rugged multisport watch with GPS tracking and a ten-day \
                          battery."
                .to_string(),
            price: "$229.99".to_string(),
            model_path: PathBuf::from("assets/models/sport_watch/scene.gltf"),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_valid() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).id, 1);
        assert_eq!(
            catalog.get(0).model_path.extension().unwrap(),
            "gltf"
        );
    }
}
