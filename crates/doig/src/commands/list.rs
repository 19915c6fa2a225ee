use crate::utils;
use doig_core::Catalog;

/// 利用可能なツールとカテゴリの一覧を表示
pub fn handle(catalog: &Catalog) {
    utils::print_heading("Tools");
    for tool in catalog.tools() {
        utils::print_item(&tool.name);
    }

    utils::print_heading("Categories");
    for category in catalog.categories() {
        utils::print_item(category);
    }
}
