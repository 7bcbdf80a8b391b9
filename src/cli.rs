use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Ditel site content from the command line
///
/// Browses the bundled product catalog, blog and testimonials, and builds
/// WhatsApp enquiry links with the configured business number.
#[derive(Parser, Debug)]
#[command(name = "ditel", version)]
pub struct Cli {
    /// Site config file (TOML). `DITEL_*` environment variables override it.
    #[arg(long, global = true, env = "DITEL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List products, filtered by category and laptop subcategory.
    Products(ProductsArgs),

    /// List single-duration plan cards sliced from pricing tables.
    Plans {
        /// Category label or slug (`isp`, `cctv`, `laptops`).
        #[arg(long, default_value = "All")]
        category: String,
    },

    /// Show one product with its WhatsApp quotation link.
    Product {
        id: String,
    },

    /// Print a WhatsApp deep link.
    Link {
        #[command(subcommand)]
        kind: LinkKind,
    },

    /// List or search blog posts.
    Blog {
        /// Case-insensitive text matched against titles and excerpts.
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value = "All")]
        category: String,

        /// Only the posts teased on the home page.
        #[arg(long, conflicts_with_all = ["search", "category"])]
        featured: bool,
    },

    /// Show one blog post and up to three related posts.
    Post {
        id: String,
    },

    /// Print customer testimonials.
    Testimonials,

    /// Print frequently asked questions.
    Faq,

    /// Fill in and submit the contact form.
    Contact(ContactArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ProductsArgs {
    /// Category label or slug (`isp`, `cctv`, `laptops`).
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Laptop subcategory; ignored for other categories.
    #[arg(long, default_value = "All")]
    pub subcategory: String,

    /// Show every match instead of the first page.
    #[arg(long)]
    pub all: bool,

    /// Print matches as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum LinkKind {
    /// General enquiry about the business.
    General,

    /// Quotation request for a product.
    Product {
        name: String,

        /// Company named in the message; defaults to the configured one.
        #[arg(long)]
        company: Option<String>,
    },

    /// Enquiry about a service.
    Service {
        name: String,
    },

    /// Free-text message.
    Message {
        text: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Accept the privacy policy. Submissions without it are refused.
    #[arg(long)]
    pub consent: bool,

    /// Print a WhatsApp link carrying the form instead of submitting it.
    #[arg(long)]
    pub whatsapp: bool,
}
