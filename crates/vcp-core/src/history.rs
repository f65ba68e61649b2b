// History from vcp-mod-history specialized to the layout document.
use vcp_mod_history::HistoryManager;

use crate::model::VcpDocument;

/// History of a layout document.
pub type DocumentHistory = HistoryManager<VcpDocument>;
