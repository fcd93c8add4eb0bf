use anyhow::Result;

use favhub_types::User;

use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext, id: u64, login: &str, avatar_url: &str) -> Result<()> {
    if login.is_empty() {
        anyhow::bail!("login cannot be empty");
    }

    let user = User::new(id, login, avatar_url);
    ctx.store()?.save(&user)?;

    println!("Saved favorite {} (#{})", login, id);
    Ok(())
}
