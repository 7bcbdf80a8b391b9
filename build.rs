use std::collections::HashMap;
use std::path::PathBuf;
use anyhow::{bail, Context, Result};
use phf_codegen::Map;

const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const PRODUCT_INDEX_FILE_NAME: &str = "product_index.rs";

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    data_dir: PathBuf,
    products_file: PathBuf,
    product_index_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let data_dir = root.join("data");
        let products_file = data_dir.join("products.json");
        let output_dir = PathBuf::from(
            std::env::var("OUT_DIR").context("OUT_DIR is not set")?
        );
        let product_index_file = output_dir.join(PRODUCT_INDEX_FILE_NAME);

        Ok(Self {
            data_dir,
            products_file,
            product_index_file,
        })
    }
}

// ===== SITE METADATA =====

struct SiteMetadata {
    company: String,
    site_url: String,
    whatsapp_number: String,
    email: String,
}

impl SiteMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        Ok(Self {
            company: Self::extract_string(metadata, "company")?,
            site_url: Self::extract_string(metadata, "site_url")?,
            whatsapp_number: Self::extract_string(metadata, "whatsapp_number")?,
            email: Self::extract_string(metadata, "email")?,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }
}

// ===== PRODUCT INDEX =====

struct ProductIndex {
    id_to_index: HashMap<String, usize>,
}

impl ProductIndex {
    fn build_from_json(json: &str) -> Result<Self> {
        let products: serde_json::Value = serde_json::from_str(json)
            .context("Bundled products.json is not valid JSON")?;

        let products = products.as_array()
            .context("Bundled products.json must be an array")?;

        let mut id_to_index = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            let id = product.get("id")
                .and_then(|id| id.as_str())
                .context(format!("Product at index {index} has no string id"))?;

            if let Some(previous) = id_to_index.insert(id.to_string(), index) {
                bail!("Duplicate product id '{id}' at indices {previous} and {index}");
            }
        }

        Ok(Self { id_to_index })
    }

    fn format_phf_hash_map(&self) -> String {
        let mut phf_builder = Map::new();
        for (key, value) in &self.id_to_index {
            phf_builder.entry(key.as_str(), value.to_string());
        }

        phf_builder.build().to_string()
    }
}

// ===== PRODUCT INDEX PROCESSOR =====

struct ProductIndexProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> ProductIndexProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_products(&self) -> Result<usize> {
        let json = std::fs::read_to_string(&self.config.products_file)
            .context(format!("Failed to read {}", self.config.products_file.display()))?;

        let index = ProductIndex::build_from_json(&json)?;

        std::fs::write(&self.config.product_index_file, index.format_phf_hash_map())
            .context("Failed to write product index file")?;

        Ok(index.id_to_index.len())
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_rerun_triggers(config: &BuildConfiguration) {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=Cargo.toml");
        println!("cargo:rerun-if-changed={}", config.data_dir.display());
    }

    fn emit_site_metadata(metadata: &SiteMetadata, product_count: usize) {
        println!("cargo:rustc-env=APP_COMPANY={}", metadata.company);
        println!("cargo:rustc-env=APP_SITE_URL={}", metadata.site_url);
        println!("cargo:rustc-env=APP_WHATSAPP_NUMBER={}", metadata.whatsapp_number);
        println!("cargo:rustc-env=APP_EMAIL={}", metadata.email);
        println!("cargo:rustc-env=APP_PRODUCT_COUNT={product_count}");
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    site_metadata: SiteMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new()?,
            site_metadata: SiteMetadata::extract_from_cargo()?,
        })
    }

    fn execute_complete_build(&self) -> Result<()> {
        CargoEnvironmentVariables::emit_rerun_triggers(&self.config);

        let product_count = ProductIndexProcessor::new(&self.config).process_products()?;
        CargoEnvironmentVariables::emit_site_metadata(&self.site_metadata, product_count);

        Ok(())
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
