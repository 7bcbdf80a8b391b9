use pretty_assertions::assert_eq;

use ditel_site::catalog::{plan_cards, CatalogBrowser, ProductFilter, Selection, PAGE_SIZE};
use ditel_site::constants;
use ditel_site::models::{Category, LAPTOP_SUBCATEGORIES};
use ditel_site::repository::Repository;
use ditel_site::whatsapp::WhatsApp;

fn repository() -> Repository {
    Repository::bundled().unwrap()
}

#[test]
fn bundled_catalog_matches_build_index() {
    let repository = repository();
    let count: usize = constants::APP_PRODUCT_COUNT.parse().unwrap();

    assert_eq!(repository.catalog().len(), count);
    assert_eq!(constants::PRODUCT_INDEX.len(), count);

    for (position, product) in repository.products().iter().enumerate() {
        assert_eq!(constants::PRODUCT_INDEX.get(product.id.as_str()), Some(&position));
        assert_eq!(repository.product(&product.id), Some(product));
    }
}

#[test]
fn bundled_categories_use_the_canonical_taxonomy() {
    let repository = repository();
    let names: Vec<&str> = repository.catalog().categories().keys().copied().collect();

    assert_eq!(names, vec!["Refurbished Laptops", "ISP Solutions", "CCTV Solutions"]);
    for product in repository.products() {
        assert!(Category::parse(&product.category).is_some(), "{}", product.category);
    }
}

#[test]
fn all_selection_returns_the_whole_catalog() {
    let repository = repository();
    let filter = ProductFilter::new(Selection::All, Selection::All);
    assert_eq!(filter.apply(repository.products()).len(), repository.products().len());
}

#[test]
fn category_filter_only_returns_that_category() {
    let repository = repository();

    for category in Category::all() {
        let filter = ProductFilter::new(Selection::from(*category), Selection::All);
        let matches = filter.apply(repository.products());

        assert!(!matches.is_empty());
        assert!(matches.iter().all(|product| product.category == category.display_name()));
    }
}

#[test]
fn laptop_subcategories_narrow_the_listing() {
    let repository = repository();

    for subcategory in LAPTOP_SUBCATEGORIES {
        let filter = ProductFilter::new(
            Selection::category("laptops"),
            Selection::parse(subcategory),
        );
        let matches = filter.apply(repository.products());

        assert!(
            matches.iter().all(|product| product.subcategory == *subcategory),
            "{subcategory}"
        );
    }

    let laptops = ProductFilter::new(Selection::category("laptops"), Selection::parse("Laptop"));
    assert_eq!(laptops.apply(repository.products()).len(), 2);
}

#[test]
fn subcategory_is_ignored_outside_laptops() {
    let repository = repository();
    let filter = ProductFilter::new(Selection::category("cctv"), Selection::parse("Laptop"));
    assert_eq!(filter.apply(repository.products()).len(), 2);
}

#[test]
fn browser_pages_the_full_catalog() {
    let repository = repository();
    let mut browser = CatalogBrowser::new(repository.products());

    assert_eq!(browser.visible().len(), PAGE_SIZE);
    assert!(browser.has_more());

    browser.expand();
    assert!(browser.is_expanded());
    assert_eq!(browser.visible().len(), repository.products().len());
}

#[test]
fn home_broadband_slices_into_duration_cards() {
    let repository = repository();
    let broadband = repository.product("isp-solutions-home-broadband-7").unwrap();

    let cards = plan_cards(broadband);
    let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Home Broadband - 1 Month",
            "Home Broadband - 3 Months",
            "Home Broadband - 6 Months",
            "Home Broadband - 12 Months",
        ]
    );

    let yearly = &cards[3];
    assert_eq!(yearly.id, "isp-solutions-home-broadband-7-12-months");
    assert_eq!(yearly.price, Some(4999.0));
    assert_eq!(yearly.image_url, "/images/plans/12-months.png");
    assert_eq!(yearly.features().len(), 2);
}

#[test]
fn product_enquiry_links_carry_the_product_name() {
    let repository = repository();
    let whatsapp = WhatsApp::new(constants::APP_WHATSAPP_NUMBER, constants::APP_COMPANY);
    let product = repository.product("cctv-solutions-hikvision-4-camera-kit-9").unwrap();

    let link = whatsapp.product_enquiry(&product.name);
    assert!(link.starts_with("https://wa.me/918447373543?text="));

    let (_, text) = link.split_once("?text=").unwrap();
    let message = urlencoding::decode(text).unwrap();
    assert!(message.contains(&product.name));
    assert!(message.contains(constants::APP_COMPANY));
}

#[test]
fn blog_and_testimonials_are_bundled() {
    let repository = repository();
    let blog = repository.blog();

    assert_eq!(blog.featured().len(), 3);
    assert_eq!(blog.categories()[0], "All");
    assert!(blog.post("cctv-placement-tips").is_some());
    assert!(!repository.testimonials().is_empty());
    assert!(!repository.faqs().is_empty());
}
