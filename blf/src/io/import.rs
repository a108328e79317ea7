use anyhow::{Context, Result, ensure};

use stowage::entities::{Container, Item};
use stowage::geometry::primitives::Dimensions;

use crate::io::ext_repr::{ExtContainer, ExtDimensions, ExtItem, ExtScenario};

fn import_dimensions(ext: ExtDimensions) -> Result<Dimensions> {
    Dimensions::try_new(ext.length, ext.width, ext.height)
}

pub fn import_container(ext: &ExtContainer) -> Result<Container> {
    let dims = import_dimensions(ext.dimensions)
        .with_context(|| format!("container {} has an invalid envelope", ext.id))?;
    Ok(Container::new(
        ext.id.clone(),
        ext.name.clone(),
        dims,
        ext.max_weight,
        ext.availability.into(),
        ext.cost,
    ))
}

/// Converts one external item into an engine item plus its unit count.
pub fn import_item(ext: &ExtItem) -> Result<(Item, usize)> {
    ensure!(ext.quantity > 0, "item {} has zero quantity", ext.id);
    let dims = import_dimensions(ext.dimensions)
        .with_context(|| format!("item {} has invalid dimensions", ext.id))?;
    let item = Item::new(
        ext.id.clone(),
        ext.name.clone(),
        ext.item_type.into(),
        dims,
        ext.weight,
        ext.can_stack,
        ext.color.clone(),
    )
    .with_context(|| format!("item {} is malformed", ext.id))?;
    Ok((item, ext.quantity))
}

pub fn import_scenario(ext: &ExtScenario) -> Result<(Container, Vec<(Item, usize)>)> {
    let container = import_container(&ext.container)?;
    let items = ext
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<_>>>()?;
    Ok((container, items))
}
