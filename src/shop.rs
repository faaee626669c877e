//! Between-level upgrade shop
//!
//! Pure logic, no UI: the shell decides when to show it. Prices climb
//! geometrically with each purchase, and everything except the hull repair
//! keeps its purchase count for the whole run.

use crate::sim::player::Player;

/// What a shop item does to the player when bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopEffect {
    /// One-shot repair to full hull
    FullRepair,
    MaxHealth(i32),
    Attack(i32),
    Defense(i32),
    MoveSpeed(i32),
    /// Extra seconds (x10) on the post-hit invulnerability window
    InvulnDuration(i32),
}

/// A purchasable upgrade.
#[derive(Debug, Clone)]
pub struct ShopItem {
    pub name: &'static str,
    pub description: &'static str,
    pub base_price: i32,
    pub purchase_count: u32,
    pub max_purchases: u32,
    pub effect: ShopEffect,
}

impl ShopItem {
    fn new(
        name: &'static str,
        description: &'static str,
        base_price: i32,
        max_purchases: u32,
        effect: ShopEffect,
    ) -> Self {
        Self {
            name,
            description,
            base_price,
            purchase_count: 0,
            max_purchases,
            effect,
        }
    }

    /// Price climbs 50% per prior purchase.
    pub fn current_price(&self) -> i32 {
        (self.base_price as f64 * 1.5f64.powi(self.purchase_count as i32)).round() as i32
    }

    pub fn sold_out(&self) -> bool {
        self.purchase_count >= self.max_purchases
    }
}

/// The station shop offered between levels.
#[derive(Debug, Clone)]
pub struct Shop {
    pub items: Vec<ShopItem>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    pub fn new() -> Self {
        Self {
            items: vec![
                ShopItem::new(
                    "Full Repair",
                    "Restore the hull to 100%",
                    120,
                    99,
                    ShopEffect::FullRepair,
                ),
                ShopItem::new(
                    "Quantum Reactor",
                    "Max HP +80",
                    200,
                    5,
                    ShopEffect::MaxHealth(80),
                ),
                ShopItem::new(
                    "Plasma Cannons",
                    "Attack +15",
                    180,
                    5,
                    ShopEffect::Attack(15),
                ),
                ShopItem::new(
                    "Titanium Plating",
                    "Defense +10",
                    150,
                    5,
                    ShopEffect::Defense(10),
                ),
                ShopItem::new(
                    "Warp Engines",
                    "Move speed +50",
                    160,
                    3,
                    ShopEffect::MoveSpeed(50),
                ),
                ShopItem::new(
                    "Deflector Shield",
                    "Invulnerability window +0.5s",
                    300,
                    3,
                    ShopEffect::InvulnDuration(5),
                ),
            ],
        }
    }

    /// Buy item `index` for `player`. Returns false (and changes nothing)
    /// when the item is sold out, the index is bad, or gold is short.
    pub fn purchase(&mut self, index: usize, player: &mut Player) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        let price = item.current_price();
        if item.sold_out() || player.gold < price {
            return false;
        }

        player.gold -= price;
        item.purchase_count += 1;
        apply_effect(item.effect, player);
        log::debug!("Bought {} for {} gold", item.name, price);
        true
    }

    /// Between levels only the repair becomes available again; permanent
    /// upgrades keep their price ladder for the whole run.
    pub fn reset_repairs(&mut self) {
        for item in &mut self.items {
            if item.effect == ShopEffect::FullRepair {
                item.purchase_count = 0;
            }
        }
    }
}

fn apply_effect(effect: ShopEffect, player: &mut Player) {
    match effect {
        ShopEffect::FullRepair => {
            player.heal(player.max_hp);
        }
        ShopEffect::MaxHealth(amount) => {
            player.max_hp += amount;
            player.hp += amount;
        }
        ShopEffect::Attack(amount) => player.attack += amount,
        ShopEffect::Defense(amount) => player.defense += amount,
        ShopEffect::MoveSpeed(amount) => player.move_speed += amount as f32,
        // Stored as tenths of a second
        ShopEffect::InvulnDuration(amount) => {
            player.invulnerable_window += amount as f32 / 10.0;
        }
    }
}
