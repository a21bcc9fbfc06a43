//! Resource stacks and the global resource ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::ResourceType;

/// A quantity of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStack {
    #[serde(rename = "type")]
    pub resource: ResourceType,
    pub amount: u32,
}

impl ResourceStack {
    pub const fn new(resource: ResourceType, amount: u32) -> Self {
        Self { resource, amount }
    }
}

/// Add `amount` of `resource` to a building-local stack list.
pub fn add_to_stacks(stacks: &mut Vec<ResourceStack>, resource: ResourceType, amount: u32) {
    match stacks.iter_mut().find(|s| s.resource == resource) {
        Some(stack) => stack.amount += amount,
        None => stacks.push(ResourceStack::new(resource, amount)),
    }
}

/// Amount of `resource` held in a stack list.
pub fn stack_amount(stacks: &[ResourceStack], resource: ResourceType) -> u32 {
    stacks
        .iter()
        .filter(|s| s.resource == resource)
        .map(|s| s.amount)
        .sum()
}

/// Remove every requirement from `stacks` if all are present. Atomic.
pub fn take_from_stacks(stacks: &mut Vec<ResourceStack>, required: &[ResourceStack]) -> bool {
    let needed = totals(required);
    if needed
        .iter()
        .any(|(&resource, &amount)| stack_amount(stacks, resource) < amount)
    {
        return false;
    }
    for (resource, mut amount) in needed {
        for stack in stacks.iter_mut().filter(|s| s.resource == resource) {
            let taken = stack.amount.min(amount);
            stack.amount -= taken;
            amount -= taken;
        }
    }
    stacks.retain(|s| s.amount > 0);
    true
}

/// Sum a stack list per resource type (duplicate entries are merged).
fn totals(stacks: &[ResourceStack]) -> BTreeMap<ResourceType, u32> {
    let mut out = BTreeMap::new();
    for stack in stacks {
        *out.entry(stack.resource).or_insert(0) += stack.amount;
    }
    out
}

/// Global named-quantity store. Quantities are unsigned, so every debit is
/// checked against the balance first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    amounts: BTreeMap<ResourceType, u32>,
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self {
            amounts: ResourceType::ALL.iter().map(|&r| (r, 0)).collect(),
        }
    }
}

impl ResourceLedger {
    /// An empty ledger with every resource at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The balance a fresh game starts with.
    pub fn starting() -> Self {
        let mut ledger = Self::new();
        ledger.set(ResourceType::IronOre, 500);
        ledger.set(ResourceType::CopperOre, 300);
        ledger.set(ResourceType::Coal, 400);
        ledger.set(ResourceType::Stone, 1000);
        ledger.set(ResourceType::IronIngot, 200);
        ledger.set(ResourceType::CopperIngot, 100);
        ledger.set(ResourceType::CopperWire, 50);
        ledger
    }

    pub fn get(&self, resource: ResourceType) -> u32 {
        self.amounts.get(&resource).copied().unwrap_or(0)
    }

    pub fn set(&mut self, resource: ResourceType, amount: u32) {
        self.amounts.insert(resource, amount);
    }

    pub fn credit(&mut self, resource: ResourceType, amount: u32) {
        let entry = self.amounts.entry(resource).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    pub fn credit_all(&mut self, stacks: &[ResourceStack]) {
        for stack in stacks {
            self.credit(stack.resource, stack.amount);
        }
    }

    pub fn can_afford(&self, cost: &[ResourceStack]) -> bool {
        totals(cost)
            .iter()
            .all(|(&resource, &amount)| self.get(resource) >= amount)
    }

    /// Debit a whole cost atomically. Returns false and leaves the ledger
    /// untouched when any part is unaffordable.
    pub fn try_debit(&mut self, cost: &[ResourceStack]) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        for stack in cost {
            if let Some(balance) = self.amounts.get_mut(&stack.resource) {
                *balance -= stack.amount;
            }
        }
        true
    }

    /// Debit a single resource if the balance covers it.
    pub fn try_debit_one(&mut self, resource: ResourceType, amount: u32) -> bool {
        self.try_debit(&[ResourceStack::new(resource, amount)])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, u32)> + '_ {
        self.amounts.iter().map(|(&r, &a)| (r, a))
    }
}
