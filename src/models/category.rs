macro_rules! define_categories {
    ($(($variant:ident, $display_name:literal, $slug:literal)),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Category {
            $($variant,)*
        }

        impl Category {
            pub const COUNT: usize = count_items!($($variant)*);

            #[must_use]
            pub fn parse(string: &str) -> Option<Self> {
                match string {
                    $($display_name | $slug => Some(Category::$variant),)*
                    _ => None,
                }
            }

            #[must_use]
            pub const fn display_name(&self) -> &'static str {
                match self {
                    $(Category::$variant => $display_name,)*
                }
            }

            #[must_use]
            pub const fn slug(&self) -> &'static str {
                match self {
                    $(Category::$variant => $slug,)*
                }
            }

            #[must_use]
            pub const fn all() -> &'static [Self; Self::COUNT] {
                &[$(Category::$variant,)*]
            }
        }

        impl std::fmt::Display for Category {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{display_name}", display_name = self.display_name())
            }
        }

        impl std::str::FromStr for Category {
            type Err = ();

            fn from_str(string: &str) -> Result<Self, Self::Err> {
                Self::parse(string).ok_or(())
            }
        }
    };
}

macro_rules! count_items {
    () => { 0 };
    ($head:tt $($tail:tt)*) => { 1 + count_items!($($tail)*) };
}

define_categories! {
    (RefurbishedLaptops, "Refurbished Laptops", "laptops"),
    (IspSolutions, "ISP Solutions", "isp"),
    (CctvSolutions, "CCTV Solutions", "cctv"),
}

/// Wildcard label shown first in every filter bar.
pub const ALL: &str = "All";

/// Subcategories offered while the laptop category is selected.
pub const LAPTOP_SUBCATEGORIES: &[&str] = &[
    "Laptop",
    "Apple Mac Book",
    "Gaming Laptop",
    "Servers",
    "Desktop",
    "Monitors",
    "IT Hardware & Networking Devices",
];

impl Category {
    /// Whether selecting this category exposes the subcategory filter.
    #[must_use]
    pub const fn has_subcategories(&self) -> bool {
        matches!(self, Self::RefurbishedLaptops)
    }

    /// Labels for the category filter bar, wildcard first.
    #[must_use]
    pub fn filter_labels() -> Vec<&'static str> {
        std::iter::once(ALL)
            .chain(Self::all().iter().map(Self::display_name))
            .collect()
    }
}
