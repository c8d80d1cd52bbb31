use blogdev_shared::{
    catalog::{CategoryInfo, TagInfo},
    ArticleCatalog,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoriesReport {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct TagsReport {
    pub total: usize,
    pub tags: Vec<TagInfo>,
}

pub fn categories(catalog: &ArticleCatalog) -> CategoriesReport {
    CategoriesReport {
        categories: catalog.categories(),
    }
}

pub fn tags(catalog: &ArticleCatalog) -> TagsReport {
    let tags = catalog.tags();
    TagsReport {
        total: tags.len(),
        tags,
    }
}
