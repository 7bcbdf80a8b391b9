use anyhow::{Context, Result};

use super::constants;
use super::models::{BlogPost, Catalog, Faq, Product, Testimonial, FAQS};
use super::search_engine::SearchEngine;

/// Read-only access to the site's static content.
pub struct Repository {
    catalog: Catalog,
    blog: SearchEngine,
    testimonials: Vec<Testimonial>,
}

impl Repository {

    pub fn new(catalog: Catalog, posts: Vec<BlogPost>, testimonials: Vec<Testimonial>) -> Self {
        Self {
            catalog,
            blog: SearchEngine::new(posts),
            testimonials,
        }
    }

    /// Content embedded at build time from `data/`.
    pub fn bundled() -> Result<Self> {
        let catalog = Catalog::from_json_with_index(constants::PRODUCTS_JSON, &constants::PRODUCT_INDEX)
            .context("Bundled products.json is invalid")?;

        let posts = serde_json::from_str(constants::BLOGS_JSON)
            .context("Bundled blogs.json is invalid")?;

        let testimonials = serde_json::from_str(constants::TESTIMONIALS_JSON)
            .context("Bundled testimonials.json is invalid")?;

        Ok(Self::new(catalog, posts, testimonials))
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.catalog.product(id)
    }

    pub const fn blog(&self) -> &SearchEngine {
        &self.blog
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub const fn faqs(&self) -> &'static [Faq] {
        FAQS
    }

}
