use burrow_db::{Record, Store, StoreConfig};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default, Serialize, Deserialize, Record)]
struct Widget {
    name: String,
    #[burrow(id)]
    num: i64,
    float: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("burrow_db=debug")),
        )
        .init();

    // Open a store rooted at ./store
    let store = Store::open(StoreConfig::new().with_root("store"))?;

    let widget = Widget {
        name: "string".to_string(),
        num: 123,
        float: 3.14,
    };
    store.put(&widget)?;

    // Read it back into a fresh value by its identifier
    let mut loaded = Widget::default();
    store.get_into(&mut loaded, &123)?;

    tracing::info!("Got widget: {:?}", loaded);
    Ok(())
}
