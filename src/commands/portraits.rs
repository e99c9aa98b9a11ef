//! Portraits command - print the portrait sync plan

use crate::{
    browse::BrowseSession,
    config::ComboDeckConfig,
    output::OutputWriter,
    portraits,
};

/// Execute the portraits command
pub fn execute(session: &BrowseSession, config: &ComboDeckConfig, out: &dyn OutputWriter) {
    let plan = portraits::plan_for_ids(session.catalogue().ids(), &config.assets.portrait_base);
    out.info(&format!("{} portraits to sync:", plan.len()));
    for target in &plan.targets {
        out.write(&format!(
            "{}\t{}\t{}",
            target.slug,
            target.local_path.display(),
            target.remote_url
        ));
    }
}
