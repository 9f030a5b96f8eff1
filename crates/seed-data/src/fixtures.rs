//! Built-in sample data, used when no dataset file is configured.

use crate::config::Dataset;
use crate::credentials::Credentials;
use crate::records::{BrandAssignment, ProductRecord, ProductType, UserRecord};

/// (name, email, password)
const USERS: &[(&str, &str, &str)] = &[
    ("Ava Mitchell", "ava.mitchell@example.com", "qwerty123"),
    ("Liam Parker", "liam.parker@example.com", "securepass"),
    ("Sophia Hayes", "sophia.hayes@example.com", "pass7890"),
    ("Noah Bennett", "noah.bennett@example.com", "hello1234"),
    ("Olivia Reed", "olivia.reed@example.com", "strongpass"),
    ("Ethan Carter", "ethan.carter@example.com", "mypassword"),
    ("Emma Brooks", "emma.brooks@example.com", "randompass"),
    ("Mason Foster", "mason.foster@example.com", "abcdef12"),
    ("Isabella Gray", "isabella.gray@example.com", "letmein123"),
    ("Lucas Turner", "lucas.turner@example.com", "hunter789"),
    ("Mia Richardson", "mia.richardson@example.com", "password77"),
    ("James Cooper", "james.cooper@example.com", "adminpass1"),
    ("Amelia Ward", "amelia.ward@example.com", "welcome88"),
    ("Benjamin Scott", "benjamin.scott@example.com", "chocolate7"),
    ("Charlotte Hughes", "charlotte.hughes@example.com", "sunshine99"),
    ("Henry Murphy", "henry.murphy@example.com", "dragon456"),
    ("Ella Wright", "ella.wright@example.com", "testpass12"),
    ("Alexander Ross", "alexander.ross@example.com", "oceanblue1"),
    ("Harper Adams", "harper.adams@example.com", "yellowmoon"),
    ("William Nelson", "william.nelson@example.com", "superpass99"),
];

/// (owner email, brand name)
const BRANDS: &[(&str, &str)] = &[
    ("isabella.gray@example.com", "Everest Gear"),
    ("lucas.turner@example.com", "Lumos Tech"),
    ("mia.richardson@example.com", "Verdant Organics"),
    ("james.cooper@example.com", "Nimbus Apparel"),
    ("amelia.ward@example.com", "Astra Motors"),
];

const PRODUCT_OWNER: &str = "isabella.gray@example.com";

const PRODUCTS: &[(&str, &str, ProductType)] = &[
    ("Digital Marketing Consultation", "Expert guidance on SEO, PPC, and content strategy.", ProductType::Service),
    ("Smartphone Stand", "Adjustable and portable stand for mobile devices.", ProductType::Product),
    ("Personal Fitness Training", "One-on-one coaching for weight loss and muscle building.", ProductType::Service),
    ("Organic Coffee Beans", "Premium Arabica coffee beans sourced from Colombia.", ProductType::Product),
    ("Home Cleaning Service", "Professional deep cleaning for homes and apartments.", ProductType::Service),
    ("Mechanical Keyboard", "RGB backlit keyboard with tactile switches.", ProductType::Product),
    ("Freelance Web Development", "Custom website development using modern technologies.", ProductType::Service),
    ("Portable Power Bank", "10,000mAh power bank with fast charging support.", ProductType::Product),
    ("Tax Filing Assistance", "Certified accountants helping with tax filing and refunds.", ProductType::Service),
    ("Noise-Canceling Headphones", "Over-ear headphones with immersive sound quality.", ProductType::Product),
    ("Virtual Assistant Service", "Remote administrative and scheduling support.", ProductType::Service),
    ("Smart LED Bulbs", "Wi-Fi enabled color-changing light bulbs.", ProductType::Product),
    ("Legal Consultation", "Professional legal advice for contracts and disputes.", ProductType::Service),
    ("Ergonomic Office Chair", "Adjustable office chair with lumbar support.", ProductType::Product),
    ("Photography Session", "Professional portrait and event photography service.", ProductType::Service),
    ("Electric Toothbrush", "Rechargeable toothbrush with multiple cleaning modes.", ProductType::Product),
    ("Language Tutoring", "Personalized lessons for learning Spanish and French.", ProductType::Service),
    ("Wireless Charging Pad", "Fast charging pad compatible with multiple devices.", ProductType::Product),
    ("Resume Writing Service", "Custom resume creation for job seekers.", ProductType::Service),
];

pub fn users() -> Vec<UserRecord> {
    USERS
        .iter()
        .map(|(name, email, password)| UserRecord::new(*name, *email, *password))
        .collect()
}

pub fn brands() -> Vec<BrandAssignment> {
    BRANDS
        .iter()
        .map(|(owner, name)| BrandAssignment::new(*owner, *name))
        .collect()
}

pub fn products() -> Vec<ProductRecord> {
    PRODUCTS
        .iter()
        .map(|(name, description, product_type)| {
            ProductRecord::new(*name, *description, *product_type)
        })
        .collect()
}

/// The full sample dataset: 20 users, 5 brand owners with one brand each,
/// and 19 products created by the first owner.
pub fn sample_dataset() -> Dataset {
    let brands = brands();
    let owners = brands.iter().map(|b| b.owner.clone()).collect();

    Dataset {
        users: users(),
        owners,
        brands,
        products: products(),
        product_owner: Some(PRODUCT_OWNER.to_string()),
        credentials: Credentials::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_is_consistent() {
        let dataset = sample_dataset();

        assert_eq!(dataset.users.len(), 20);
        assert_eq!(dataset.brands.len(), 5);
        assert_eq!(dataset.products.len(), 19);

        for owner in &dataset.owners {
            assert!(dataset.user(owner).is_some(), "owner {owner} has no account");
        }
        for brand in &dataset.brands {
            assert!(dataset.owners.contains(&brand.owner));
        }
        let product_owner = dataset.product_owner.as_deref().unwrap();
        assert!(dataset.owners.iter().any(|o| o == product_owner));
    }

    #[test]
    fn test_emails_are_unique() {
        let users = users();
        let mut emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), users.len());
    }
}
