use anyhow::Result;

use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext, id: u64) -> Result<()> {
    let removed = ctx.store()?.delete(id)?;

    if removed {
        println!("Removed favorite #{}", id);
    } else {
        println!("No favorite with id {}", id);
    }

    Ok(())
}
