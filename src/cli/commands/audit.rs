use crate::config::Config;
use crate::core::log::AuditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(cfg)?;
    AuditLogic::print_audit(&mut pool)
}
