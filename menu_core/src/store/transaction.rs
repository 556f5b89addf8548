use thiserror::Error;

use crate::{
    data::{
        catalog::Catalog,
        form::{MenuItemForm, ValidationError},
        item::MenuItemId,
    },
    digest::{DigestOutput, Digestible},
};

/// A transaction that can be executed on some type `V`, modifying it.
pub trait Transaction<V> {
    /// Executes the transaction on the given `V`, modifying it. If the
    /// transaction is successful, returns a function that can be used to
    /// roll back the transaction; when given a `V` in the exact state after
    /// this transaction executed, the rollback is guaranteed to
    /// modify the `V` into the exact state before this transaction executed. If
    /// the execution is unsuccessful, the `V` must remain unchanged.
    fn execute(&self, value: &mut V) -> Result<Rollback<V>, TransactionError>;
}

pub type Rollback<V> = Box<dyn Fn(&mut V)>;

/// Error type for executing transactions.
#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

/// An edit a user can make to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEdit {
    /// Validate the form and append the resulting item.
    Add(MenuItemForm),
    /// Remove the item with this ID. Removing a missing ID succeeds and changes
    /// nothing.
    Remove(MenuItemId),
}

impl Transaction<Catalog> for CatalogEdit {
    fn execute(&self, catalog: &mut Catalog) -> Result<Rollback<Catalog>, TransactionError> {
        match self {
            CatalogEdit::Add(form) => {
                let next_item_id = catalog.next_item_id();
                catalog.add(form)?;
                Ok(Box::new(move |catalog: &mut Catalog| {
                    let retracted = catalog.retract_last(next_item_id);
                    debug_assert!(
                        retracted.is_some(),
                        "rollback from different state than expected"
                    );
                }))
            }
            CatalogEdit::Remove(id) => match catalog.take(id) {
                Some((index, item)) => Ok(Box::new(move |catalog: &mut Catalog| {
                    catalog.restore(index, item.clone());
                })),
                None => Ok(Box::new(|_: &mut Catalog| {})),
            },
        }
    }
}

/// Executes all the given transactions on the given value and returns a vector
/// containing the digests of each intermediate value and the corresponding
/// transaction that acted on that value. If one of the transactions fails, then
/// the entire process is rolled back as if nothing happened at all. The error
/// and index of the transaction that failed is returned.
pub fn execute_all_or_roll_back<V, I, T>(
    value: &mut V,
    transactions: I,
) -> Result<Vec<(DigestOutput, T)>, (TransactionError, usize)>
where
    V: Digestible,
    I: IntoIterator<Item = T>,
    T: Transaction<V>,
{
    let mut rollback_stack = Vec::new();
    let mut history = Vec::new();
    for (i, transaction) in transactions.into_iter().enumerate() {
        let digest = value.digest();
        match transaction.execute(value) {
            Ok(rollback) => {
                rollback_stack.push(rollback);
                history.push((digest, transaction));
            }
            Err(err) => {
                for rollback in rollback_stack.into_iter().rev() {
                    rollback(value);
                }
                return Err((err, i));
            }
        };
    }
    Ok(history)
}
