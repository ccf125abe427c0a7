use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::{Credentials, ExportLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        user,
        password,
        force,
    } = cmd
    {
        let creds = Credentials {
            user: user.clone(),
            password: password.clone(),
        };
        let mut pool = DbPool::open(cfg)?;
        ExportLogic::export(&mut pool, cfg, &creds, *format, file, *force)?;
    }
    Ok(())
}
