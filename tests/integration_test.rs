use pattern_recipe::car_builder::{CarAssembler, CarBuilder, Director};
use pattern_recipe::clients::FurnitureClient;
use pattern_recipe::furniture_factory::{Catalog, FamilyFactory, FurnitureFactory};
use pattern_recipe::model::{Category, Family};
use std::sync::Arc;

/// Every item from a factory names that factory's family and no other.
#[test]
fn test_family_consistency() {
    for family in Family::ALL {
        let factory = FamilyFactory::new(family);
        for category in Category::ALL {
            let item = factory.create(category);
            assert_eq!(item.family(), family);
            assert_eq!(item.category(), category);

            let description = item.describe();
            assert!(description.contains(family.tag()), "{}", description);
            for other in Family::ALL.into_iter().filter(|f| *f != family) {
                assert!(
                    !description.contains(other.tag()),
                    "{} mentions {}",
                    description,
                    other
                );
            }
        }
    }
}

/// Two families never describe the same category the same way.
#[test]
fn test_family_distinctness() {
    for category in Category::ALL {
        for a in Family::ALL {
            for b in Family::ALL.into_iter().filter(|f| *f != a) {
                let left = FamilyFactory::new(a).create(category).describe();
                let right = FamilyFactory::new(b).create(category).describe();
                assert_ne!(left, right);
            }
        }
    }
}

#[test]
fn test_modern_showroom() {
    let client = FurnitureClient::new(FamilyFactory::new(Family::Modern));
    let products = client.show_products();

    assert_eq!(products.len(), 3);
    for description in &products {
        assert!(description.contains("modern"));
        assert!(!description.contains("victorian"));
        assert!(!description.contains("art-deco"));
    }
}

/// Basic car, explicit reset, then a full-featured car on the same builder.
#[test]
fn test_director_sessions() {
    let director = Director::new();
    let mut builder = CarAssembler::new();
    assert!(builder.result().is_empty());

    director.build_basic_car(&mut builder).unwrap();
    assert_eq!(builder.result().parts(), ["- has 4 seats", "- uses Oil"]);
    // Reading twice returns the same parts
    assert_eq!(builder.result().parts(), ["- has 4 seats", "- uses Oil"]);

    builder.reset();
    assert!(builder.result().is_empty());

    director.build_full_featured_car(&mut builder).unwrap();
    assert_eq!(
        builder.result().parts(),
        ["- has 4 seats", "- uses Gas", "- has GPS system"]
    );
}

#[test]
fn test_global_catalog_is_one_instance() {
    let first = Catalog::global();
    let second = Catalog::global();
    assert!(std::ptr::eq(first, second));

    // A fresh catalog is a different instance with the same contents
    let fresh = Catalog::standard();
    assert!(!std::ptr::eq(first, &fresh));
    assert_eq!(first.len(), fresh.len());
}

/// Factories are stateless and can be shared between tasks.
#[tokio::test]
async fn test_shared_factory_across_tasks() {
    let factory = Arc::new(FamilyFactory::new(Family::ArtDeco));

    let mut handles = vec![];
    for _ in 0..8 {
        let factory = factory.clone();
        handles.push(tokio::spawn(async move {
            Category::ALL
                .into_iter()
                .map(|c| factory.create(c).describe())
                .collect::<Vec<_>>()
        }));
    }

    for handle in handles {
        let descriptions = handle.await.unwrap();
        assert_eq!(
            descriptions,
            [
                "I am an art-deco chair!",
                "I am an art-deco table!",
                "I am an art-deco sofa!",
            ]
        );
    }
}

/// Concurrent first access to the global catalog still yields one instance.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_global_catalog_from_many_threads() {
    let mut handles = vec![];
    for _ in 0..16 {
        handles.push(tokio::spawn(async {
            Catalog::global() as *const Catalog as usize
        }));
    }

    let mut addresses = vec![];
    for handle in handles {
        addresses.push(handle.await.unwrap());
    }
    addresses.dedup();
    assert_eq!(addresses.len(), 1);
}

#[test]
fn test_family_serde_uses_tags() {
    let json = serde_json::to_string(&Family::ArtDeco).unwrap();
    assert_eq!(json, "\"art-deco\"");

    let family: Family = serde_json::from_str("\"victorian\"").unwrap();
    assert_eq!(family, Family::Victorian);
}
