//! Sample product generation for seeding an empty table.
//!
//! Pure functions over an injected random number generator, so the output is
//! reproducible in tests with a seeded RNG.

use rand::Rng;
use uuid::{Builder, Uuid};

use super::types::Product;

/// Number of products written by a single seed request.
pub const DEFAULT_SEED_COUNT: usize = 4;

/// Lower (inclusive) and upper (exclusive) bounds for generated prices.
pub const PRICE_RANGE: (f64, f64) = (10.0, 100.0);

/// Lower (inclusive) and upper (exclusive) bounds for generated rates.
pub const RATE_RANGE: (f64, f64) = (0.0, 5.0);

const IMAGE_BASE_URL: &str = "http://lorempixel.com/200/200";

const WORDS: &[&str] = &[
    "alias", "amet", "aperiam", "beatae", "blanditiis", "commodi", "consequatur", "corporis",
    "culpa", "delectus", "dolor", "dolores", "doloremque", "eius", "eligendi", "enim", "error",
    "eveniet", "expedita", "facilis", "fugiat", "harum", "illum", "impedit", "ipsam", "labore",
    "laudantium", "magnam", "maxime", "minima", "molestiae", "nemo", "nesciunt", "nihil",
    "numquam", "officia", "omnis", "pariatur", "perferendis", "placeat", "porro", "quaerat",
    "quibusdam", "ratione", "recusandae", "repellat", "rerum", "saepe", "sapiente", "sequi",
    "similique", "sunt", "tempora", "totam", "ullam", "veniam", "voluptas", "voluptatem",
];

/// Generate `count` sample products.
///
/// Each product gets a random UUID as its ID, a single word as its name, a
/// paragraph of filler text as its description, and a placeholder image URL.
/// Prices fall in [`PRICE_RANGE`] and rates in [`RATE_RANGE`].
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use shopfront_core::product::generate_sample_products;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let products = generate_sample_products(&mut rng, 4);
///
/// assert_eq!(products.len(), 4);
/// ```
pub fn generate_sample_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Product> {
    (0..count).map(|_| generate_sample_product(rng)).collect()
}

/// Generate a single sample product.
pub fn generate_sample_product<R: Rng + ?Sized>(rng: &mut R) -> Product {
    let id = random_uuid(rng);
    let image = format!("{IMAGE_BASE_URL}?{}", random_uuid(rng).simple());

    Product::new(id.to_string(), random_word(rng))
        .with_description(random_paragraph(rng))
        .with_price(rng.random_range(PRICE_RANGE.0..PRICE_RANGE.1))
        .with_rate(rng.random_range(RATE_RANGE.0..RATE_RANGE.1))
        .with_image(image)
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORDS[rng.random_range(0..WORDS.len())]
}

fn random_sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(5..=12);
    let words: Vec<&str> = (0..len).map(|_| random_word(rng)).collect();
    let sentence = words.join(" ");

    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

fn random_paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(3..=6);
    (0..len)
        .map(|_| random_sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_sample_products(&mut rng, 0).len(), 0);
        assert_eq!(
            generate_sample_products(&mut rng, DEFAULT_SEED_COUNT).len(),
            DEFAULT_SEED_COUNT
        );
    }

    #[test]
    fn test_generated_fields_are_populated_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for product in generate_sample_products(&mut rng, 200) {
            assert!(!product.id.is_empty());
            assert!(!product.name.is_empty());
            assert!(!product.description.is_empty());
            assert!(product.image.starts_with("http://lorempixel.com/200/200?"));
            assert!(product.price >= 10.0 && product.price < 100.0);
            assert!(product.rate >= 0.0 && product.rate < 5.0);
        }
    }

    #[test]
    fn test_ids_are_uuids_and_unique() {
        let mut rng = StdRng::seed_from_u64(99);
        let products = generate_sample_products(&mut rng, 50);

        let ids: std::collections::HashSet<&str> =
            products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        assert!(products.iter().all(|p| Uuid::parse_str(&p.id).is_ok()));
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let a = generate_sample_products(&mut StdRng::seed_from_u64(5), 3);
        let b = generate_sample_products(&mut StdRng::seed_from_u64(5), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_description_is_sentences() {
        let mut rng = StdRng::seed_from_u64(3);
        let description = random_paragraph(&mut rng);

        assert!(description.ends_with('.'));
        assert!(description.chars().next().unwrap().is_uppercase());
        assert!(description.split(". ").count() >= 3);
    }
}
