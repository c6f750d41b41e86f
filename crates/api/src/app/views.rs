//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary and loaded once at startup. The
//! `.html` names turn on minijinja's HTML auto-escaping for item fields.

use axum::response::Html;
use minijinja::{context, Environment};

use invtrack_inventory::InventoryItem;

use crate::app::dto::ItemView;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("add_item.html", include_str!("../../templates/add_item.html")),
    ("edit_item.html", include_str!("../../templates/edit_item.html")),
];

#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// List view of the whole collection.
    pub fn index(&self, items: &[InventoryItem]) -> Result<Html<String>, minijinja::Error> {
        let items: Vec<ItemView> = items.iter().map(ItemView::from).collect();
        self.render("index.html", context! { items => items })
    }

    pub fn add_form(&self) -> Result<Html<String>, minijinja::Error> {
        self.render("add_item.html", context! {})
    }

    /// Edit form pre-filled with the item's current values.
    pub fn edit_form(&self, item: &InventoryItem) -> Result<Html<String>, minijinja::Error> {
        let item = ItemView::from(item);
        self.render("edit_item.html", context! { item => item })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<Html<String>, minijinja::Error> {
        let html = self.env.get_template(name)?.render(ctx)?;
        Ok(Html(html))
    }
}
