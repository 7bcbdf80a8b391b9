use std::path::Path;
use std::thread;

use anyhow::{bail, Context, Result};

use ditel_site::catalog::{expand_plan_cards, CatalogBrowser, ProductFilter, Selection, EMPTY_MESSAGE};
use ditel_site::config::SiteConfig;
use ditel_site::contact::ContactForm;
use ditel_site::models::{format_amount, BlogPost, Category, Product, MAX_RATING};
use ditel_site::repository::Repository;
use ditel_site::whatsapp::WhatsApp;

use super::cli::{Command, ContactArgs, LinkKind, ProductsArgs};

pub struct Application {
    repository: Repository,
    config: SiteConfig,
    whatsapp: WhatsApp,
}

impl Application {

    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = SiteConfig::load(config_path)?;
        let whatsapp = WhatsApp::from_config(&config);
        let repository = Repository::bundled()?;

        log::debug!(
            "Loaded {} products, {} posts, {} testimonials",
            repository.catalog().len(),
            repository.blog().posts().len(),
            repository.testimonials().len()
        );

        Ok(Self { repository, config, whatsapp })
    }

    pub fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Products(args) => self.show_products(&args),
            Command::Plans { category } => {
                self.show_plans(&Selection::category(&category));
                Ok(())
            }
            Command::Product { id } => self.show_product(&id),
            Command::Link { kind } => {
                println!("{}", self.link(kind));
                Ok(())
            }
            Command::Blog { search, category, featured } => {
                self.show_blog(&search, &category, featured);
                Ok(())
            }
            Command::Post { id } => self.show_post(&id),
            Command::Testimonials => {
                self.show_testimonials();
                Ok(())
            }
            Command::Faq => {
                self.show_faq();
                Ok(())
            }
            Command::Contact(args) => self.submit_contact(args),
        }
    }

    fn show_products(&self, args: &ProductsArgs) -> Result<()> {
        let mut browser = CatalogBrowser::new(self.repository.products());
        browser
            .select_category(Selection::category(&args.category))
            .select_subcategory(Selection::parse(&args.subcategory));

        if args.all {
            browser.expand();
        }

        if args.json {
            let json = serde_json::to_string_pretty(&browser.visible())
                .context("Failed to serialize products")?;
            println!("{json}");
            return Ok(());
        }

        if browser.is_empty() {
            println!("{EMPTY_MESSAGE}");
            Self::print_category_choices();
            return Ok(());
        }

        for product in browser.visible() {
            println!("{}", Self::product_line(product));
        }

        if browser.has_more() && !browser.is_expanded() {
            let hidden = browser.filtered().len() - browser.visible().len();
            println!("... and {hidden} more (use --all to show everything)");
        }

        Ok(())
    }

    fn show_plans(&self, category: &Selection) {
        let filter = ProductFilter::new(category.clone(), Selection::All);
        let products: Vec<Product> = filter
            .apply(self.repository.products())
            .into_iter()
            .cloned()
            .collect();

        let cards = expand_plan_cards(&products);
        if cards.is_empty() {
            println!("{EMPTY_MESSAGE}");
            return;
        }

        for card in &cards {
            println!("{}", Self::product_line(card));
            for feature in card.features() {
                println!("    {feature}");
            }
        }
    }

    fn show_product(&self, id: &str) -> Result<()> {
        let Some(product) = self.repository.product(id) else {
            bail!("No product with id '{id}'");
        };

        println!("{}", product.name);
        println!("{} / {}", product.category, product.subcategory);
        if let Some(price) = product.price {
            println!("Price: {} {}", product.currency(), format_amount(price));
        }
        println!("SKU: {}", product.sku);
        println!(
            "Stock: {}",
            if product.in_stock() { product.stock.to_string() } else { "out of stock".to_string() }
        );
        println!();
        println!("{}", product.short_description);

        for feature in product.features() {
            println!("  - {feature}");
        }

        if let Some(table) = &product.pricing_table {
            println!();
            println!("{:>8}  {}", "Mbps", table.columns.join("  "));
            for row in &table.rows {
                let prices: Vec<String> = table
                    .durations()
                    .map(|(_, key)| row.price(&key).map_or_else(|| "-".to_string(), format_amount))
                    .collect();
                println!("{:>8}  {}", row.mbps, prices.join("  "));
            }
        }

        println!();
        println!("Get a quote: {}", self.whatsapp.product_enquiry(&product.name));
        Ok(())
    }

    fn link(&self, kind: LinkKind) -> String {
        match kind {
            LinkKind::General => self.whatsapp.general_enquiry(),
            LinkKind::Product { name, company: Some(company) } => {
                self.whatsapp.product_enquiry_from(&name, &company)
            }
            LinkKind::Product { name, company: None } => self.whatsapp.product_enquiry(&name),
            LinkKind::Service { name } => self.whatsapp.service_enquiry(&name),
            LinkKind::Message { text } => self.whatsapp.link(&text),
        }
    }

    fn show_blog(&self, search: &str, category: &str, featured: bool) {
        let blog = self.repository.blog();

        let posts: Vec<&BlogPost> = if featured {
            blog.featured().iter().collect()
        } else {
            blog.find(search, &Selection::parse(category))
        };

        if posts.is_empty() {
            println!("No articles found.");
            println!("Categories: {}", blog.categories().join(", "));
            return;
        }

        for post in posts {
            println!("{} [{}] {}", post.id, post.category, post.title);
            println!("    {}", post.excerpt);
        }
    }

    fn show_post(&self, id: &str) -> Result<()> {
        let blog = self.repository.blog();
        let Some(post) = blog.post(id) else {
            bail!("No blog post with id '{id}'");
        };

        println!("{}", post.title);
        println!("{} | {} | {}", post.author, post.date, post.category);
        if let Some(read_time) = &post.read_time {
            println!("{read_time}");
        }
        println!();
        println!("{}", if post.content.is_empty() { &post.excerpt } else { &post.content });

        if !post.tags.is_empty() {
            println!();
            println!("Tags: {}", post.tags.join(", "));
        }

        let related = blog.related(id);
        if !related.is_empty() {
            println!();
            println!("Related articles:");
            for post in related {
                println!("  {} - {}", post.id, post.title);
            }
        }

        Ok(())
    }

    fn show_testimonials(&self) {
        for testimonial in self.repository.testimonials() {
            let stars = usize::from(testimonial.stars());
            println!(
                "{}{} {} ({}, {}, {})",
                "*".repeat(stars),
                " ".repeat(usize::from(MAX_RATING) - stars),
                testimonial.name,
                testimonial.role,
                testimonial.company,
                testimonial.location
            );
            println!("    \"{}\"", testimonial.text);
        }
    }

    fn show_faq(&self) {
        for faq in self.repository.faqs() {
            println!("Q: {}", faq.question);
            println!("A: {}", faq.answer);
            println!();
        }
        println!("Still have questions? Email {} or {}", self.config.email, self.whatsapp.general_enquiry());
        println!("More at {}", self.config.site_url);
    }

    fn submit_contact(&self, args: ContactArgs) -> Result<()> {
        let mut form = ContactForm {
            name: args.name,
            email: args.email,
            phone: args.phone,
            subject: args.subject,
            message: args.message,
            consent: args.consent,
        };

        if args.whatsapp {
            println!("{}", form.whatsapp_link(&self.whatsapp)?);
            return Ok(());
        }

        let acknowledgement = form.submit()?;
        println!("Sending...");
        thread::sleep(acknowledgement.delay);
        println!("{}", acknowledgement.message);
        Ok(())
    }

    fn print_category_choices() {
        let slugs: Vec<&str> = Category::all().iter().map(Category::slug).collect();
        println!("Categories: {}", Category::filter_labels().join(", "));
        println!("Short names: {}", slugs.join(", "));
    }

    fn product_line(product: &Product) -> String {
        let price = product
            .price
            .map(|price| format!("{} {}", product.currency(), format_amount(price)))
            .unwrap_or_default();

        format!(
            "{:<32} {:<28} {:>14}  {}",
            product.id,
            product.name,
            price,
            product.subcategory
        )
    }

}
