use crate::catalog::Selection;
use crate::models::{BlogPost, ALL};
use crate::ordered_map::OrderedMap;
use std::rc::Rc;

const FEATURED_COUNT: usize = 3;
const RELATED_COUNT: usize = 3;

struct SearchableText {
    title: String,
    excerpt: String,
}

struct SearchIndex {
    posts: Vec<BlogPost>,
    searchable: Vec<SearchableText>,
}

/// Blog listing, search and related-post lookup over the static posts.
#[derive(Clone)]
pub struct SearchEngine {
    index: Rc<SearchIndex>,
}

impl SearchEngine {

    fn normalize_text(text: &str) -> String {
        text.to_lowercase()
    }

    fn build_searchable_text(posts: &[BlogPost]) -> Vec<SearchableText> {
        posts
            .iter()
            .map(|post| SearchableText {
                title: Self::normalize_text(&post.title),
                excerpt: Self::normalize_text(&post.excerpt),
            })
            .collect()
    }

    fn post_matches_query(&self, post_index: usize, query: &str) -> bool {
        let text = &self.index.searchable[post_index];
        text.title.contains(query) || text.excerpt.contains(query)
    }

    #[must_use]
    pub fn new(posts: Vec<BlogPost>) -> Self {
        let searchable = Self::build_searchable_text(&posts);
        let index = Rc::new(SearchIndex { posts, searchable });

        Self { index }
    }

    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.index.posts
    }

    /// `All` followed by each distinct category in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = OrderedMap::new();
        for post in self.posts() {
            categories.insert(post.category.as_str(), ());
        }

        std::iter::once(ALL)
            .chain(categories.keys().copied())
            .collect()
    }

    /// Case-insensitive substring match on title or excerpt, restricted to
    /// the selected category. An empty query matches every post.
    #[must_use]
    pub fn find(&self, query: &str, category: &Selection) -> Vec<&BlogPost> {
        let query = Self::normalize_text(query);

        self.posts()
            .iter()
            .enumerate()
            .filter(|(_, post)| category.matches(&post.category))
            .filter(|&(post_index, _)| self.post_matches_query(post_index, &query))
            .map(|(_, post)| post)
            .collect()
    }

    #[must_use]
    pub fn featured(&self) -> &[BlogPost] {
        let posts = self.posts();
        &posts[..posts.len().min(FEATURED_COUNT)]
    }

    #[must_use]
    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts().iter().find(|post| post.id == id)
    }

    /// Other posts sharing the category of `id`; empty for unknown ids.
    #[must_use]
    pub fn related(&self, id: &str) -> Vec<&BlogPost> {
        let Some(current) = self.post(id) else {
            return Vec::new();
        };

        self.posts()
            .iter()
            .filter(|post| post.id != id && post.category == current.category)
            .take(RELATED_COUNT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, excerpt: &str, category: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            description: String::new(),
            content: String::new(),
            category: category.to_string(),
            author: "Ditel Team".to_string(),
            date: "2024-10-01".to_string(),
            read_time: None,
            image: String::new(),
            tags: Vec::new(),
        }
    }

    fn engine() -> SearchEngine {
        SearchEngine::new(vec![
            post("a", "Refurbished Laptops Explained", "Why refurbished makes sense", "Laptops"),
            post("b", "Broadband Speeds", "Pick the right plan", "Internet"),
            post("c", "Battery Care", "Keep your LAPTOP healthy", "Laptops"),
            post("d", "CCTV Placement", "Cover every entrance", "Security"),
            post("e", "Docking Stations", "Desk setups for laptops", "Laptops"),
            post("f", "Laptop Bags", "Carry in style", "Laptops"),
        ])
    }

    fn ids(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|post| post.id.clone()).collect()
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(engine().categories(), vec!["All", "Laptops", "Internet", "Security"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_excerpt() {
        let engine = engine();
        assert_eq!(ids(&engine.find("laptop", &Selection::All)), vec!["a", "c", "e", "f"]);
        assert_eq!(ids(&engine.find("PLAN", &Selection::All)), vec!["b"]);
        assert_eq!(engine.find("", &Selection::All).len(), 6);
    }

    #[test]
    fn search_respects_category() {
        let engine = engine();
        let laptops = Selection::parse("Laptops");
        assert_eq!(ids(&engine.find("", &laptops)), vec!["a", "c", "e", "f"]);
        assert!(engine.find("cctv", &laptops).is_empty());
    }

    #[test]
    fn featured_takes_first_three() {
        let featured: Vec<_> = engine().featured().iter().map(|post| post.id.clone()).collect();
        assert_eq!(featured, vec!["a", "b", "c"]);
    }

    #[test]
    fn related_posts_share_category_and_exclude_self() {
        let engine = engine();
        assert_eq!(ids(&engine.related("c")), vec!["a", "e", "f"]);
        assert!(engine.related("d").is_empty());
        assert!(engine.related("missing").is_empty());
        assert_eq!(engine.post("b").map(|post| post.title.as_str()), Some("Broadband Speeds"));
    }
}
