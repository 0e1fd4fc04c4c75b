use crate::cart::Cart;
use fitout_catalog::ItemCatalog;

/// Cart total in euro cents: the sum of unit price times quantity over
/// every line. Pure function of its inputs; lines whose item is no
/// longer in the catalog contribute zero.
pub fn compute_cart_total(items: &ItemCatalog, cart: &Cart) -> i64 {
    cart.lines()
        .iter()
        .filter_map(|line| {
            items
                .item(&line.item_id)
                .map(|item| item.price_cents * i64::from(line.quantity))
        })
        .sum()
}
