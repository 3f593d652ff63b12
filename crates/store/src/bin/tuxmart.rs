use anyhow::Context;

use tuxmart_accounting::{ACCOUNTS_RECEIVABLE, SALES_REVENUE};
use tuxmart_store::demo::demo_catalog;
use tuxmart_store::{DemoStore, StoreConfig};

/// Upper bound on demo sales when neither the balance nor the shelves run out.
const MAX_DEMO_SALES: usize = 100;

fn main() -> anyhow::Result<()> {
    let config = StoreConfig::from_env().context("invalid configuration")?;
    tuxmart_observability::init(config.log_format);

    let catalog = demo_catalog()?;
    let store = DemoStore::open(&config, &catalog).context("failed to open store")?;

    let run = store
        .sell_until_exhausted(&catalog, MAX_DEMO_SALES)
        .context("failed to build demo order")?;
    tracing::info!(completed = run.completed, end = ?run.end, "demo sales stopped");

    for product in &catalog {
        tracing::info!(
            sku = %product.sku(),
            on_hand = ?store.stock.on_hand(product.sku()),
            "stock level"
        );
    }

    let balance = store.account.balance()?;
    let receivables = store.ledger.balance(ACCOUNTS_RECEIVABLE)?;
    let revenue = store.ledger.balance(SALES_REVENUE)?;
    let entries = store.ledger.entries()?.len();
    tracing::info!(%balance, %receivables, %revenue, entries, "demo finished");

    Ok(())
}
