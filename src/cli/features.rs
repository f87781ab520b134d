//! Feature schema command

use anyhow::Result;

use crate::features::FEATURE_SCHEMA;

/// Print the feature schema, one name per line with its column index
pub async fn features() -> Result<()> {
    for (i, name) in FEATURE_SCHEMA.iter().enumerate() {
        println!("{:>2}  {}", i, name);
    }
    Ok(())
}
