use crate::models::{CartItem, Product};

/// In-memory shopping cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, bumping the quantity if already present
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.product_id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::from_product(product)),
        }
    }

    /// Set a line's quantity; the quantity never drops below one.
    ///
    /// Returns false when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: u32, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity.max(1);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Units across all lines, summed as u64
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Favorite product ids in the order they were added
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product_id: u32) {
        if !self.contains(product_id) {
            self.ids.push(product_id);
        }
    }

    pub fn remove(&mut self, product_id: u32) {
        self.ids.retain(|id| *id != product_id);
    }

    /// Flip membership and return whether the product is now a favorite
    pub fn toggle(&mut self, product_id: u32) -> bool {
        if self.contains(product_id) {
            self.remove(product_id);
            false
        } else {
            self.ids.push(product_id);
            true
        }
    }

    pub fn contains(&self, product_id: u32) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
