use strum_macros::EnumString;

use super::model::Product;

/// Field a product listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    Name,
    /// Sale price.
    Price,
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter and sort parameters for a product listing.
///
/// Filters are case-insensitive substring tests composed with AND; an absent
/// or empty filter matches everything. When `sort` is `None` the filtered
/// products keep their original (insertion) order.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub size: Option<String>,
    pub name: Option<String>,
    pub sort: Option<SortKey>,
    pub order: SortOrder,
}

impl ProductQuery {
    /// Applies the query to a snapshot of the registry, returning a new
    /// ordered sequence. The input is consumed; the registry itself is
    /// never touched.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut selected: Vec<Product> = products
            .into_iter()
            .filter(|p| {
                matches_filter(self.category.as_deref(), &p.category)
                    && matches_filter(self.size.as_deref(), &p.size)
                    && matches_filter(self.name.as_deref(), &p.name)
            })
            .collect();

        if let Some(key) = self.sort {
            // Vec::sort_by is stable, so equal keys keep their filtered order.
            selected.sort_by(|a, b| {
                let ordering = match key {
                    SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                    SortKey::Price => a.sale_price.total_cmp(&b.sale_price),
                    SortKey::Quantity => a.quantity.cmp(&b.quantity),
                };
                match self.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        selected
    }
}

fn matches_filter(filter: Option<&str>, value: &str) -> bool {
    match filter {
        Some(f) if !f.is_empty() => value.to_lowercase().contains(&f.to_lowercase()),
        _ => true,
    }
}
