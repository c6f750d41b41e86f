use serde::Serialize;

use invtrack_core::{DomainError, DomainResult, ItemId};

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl InventoryItem {
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            quantity: fields.quantity,
            price: fields.price,
        }
    }

    /// Overwrite the mutable fields in place; the id never changes.
    pub fn apply(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.quantity = fields.quantity;
        self.price = fields.price;
    }
}

/// Parsed, typed form input for add/edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl ItemFields {
    /// Parse raw form text.
    ///
    /// Surrounding whitespace is ignored on the numeric fields; the name is
    /// kept verbatim. Quantity has no lower bound.
    pub fn parse(name: &str, quantity: &str, price: &str) -> DomainResult<Self> {
        Ok(Self {
            name: name.to_string(),
            quantity: parse_quantity(quantity)?,
            price: parse_price(price)?,
        })
    }
}

fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::parse("quantity", raw))
}

fn parse_price(raw: &str) -> DomainResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| DomainError::parse("price", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_fields() {
        let fields = ItemFields::parse("Widget", "10", "2.50").unwrap();
        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.quantity, 10);
        assert_eq!(fields.price, 2.5);
    }

    #[test]
    fn tolerates_whitespace_and_negative_quantity() {
        let fields = ItemFields::parse("  Bolt ", " -3 ", "\t7\n").unwrap();
        assert_eq!(fields.name, "  Bolt ");
        assert_eq!(fields.quantity, -3);
        assert_eq!(fields.price, 7.0);
    }

    #[test]
    fn malformed_quantity_is_a_parse_error() {
        let err = ItemFields::parse("Widget", "ten", "2.50").unwrap_err();
        assert_eq!(err, DomainError::parse("quantity", "ten"));

        let err = ItemFields::parse("Widget", "2.5", "2.50").unwrap_err();
        assert_eq!(err, DomainError::parse("quantity", "2.5"));
    }

    #[test]
    fn malformed_price_is_a_parse_error() {
        let err = ItemFields::parse("Widget", "1", "").unwrap_err();
        assert_eq!(err, DomainError::parse("price", ""));

        let err = ItemFields::parse("Widget", "1", "$3").unwrap_err();
        assert_eq!(err, DomainError::parse("price", "$3"));
    }

    #[test]
    fn underscores_and_out_of_range_quantities_are_rejected() {
        let err = ItemFields::parse("Widget", "1_000", "1").unwrap_err();
        assert_eq!(err, DomainError::parse("quantity", "1_000"));

        let err = ItemFields::parse("Widget", "9223372036854775808", "1").unwrap_err();
        assert_eq!(err, DomainError::parse("quantity", "9223372036854775808"));

        let err = ItemFields::parse("Widget", "1", "1_0.5").unwrap_err();
        assert_eq!(err, DomainError::parse("price", "1_0.5"));
    }

    #[test]
    fn apply_keeps_id() {
        let id = ItemId::new(4).unwrap();
        let mut item = InventoryItem::new(id, ItemFields::parse("A", "1", "1").unwrap());
        item.apply(ItemFields::parse("B", "2", "3.5").unwrap());
        assert_eq!(item.id, id);
        assert_eq!(item.name, "B");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, 3.5);
    }
}
