//! Wire DTOs for the access-control REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly. Fields the server omits on
//! some records are `Option` or `#[serde(default)]` so one sparse document
//! never fails a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /api/supervisor/access/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful credential exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub admin_id: String,
    pub name: String,
    pub email: String,
}

/// Error payload the API returns with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// OVERVIEW
// =============================================================================

/// Access decision recorded for a gate event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    Granted,
    #[default]
    Denied,
}

impl AccessStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

/// `GET /api/overview/` dashboard metrics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overview {
    pub response_time_ms: f64,
    pub blockchain_sync: bool,
    pub blockchain_latency_ms: f64,
    pub total_devices: u64,
    pub active_devices: u64,
    pub total_users: u64,
    pub active_users: u64,
    pub total_visitors_count: u64,
    pub successful_verifications: u64,
    pub denied_verifications: u64,
    pub total_verifications: u64,
    pub verification_success_rate: f64,
    pub recent_access_logs: Vec<RecentAccessLog>,
}

/// One entry of the overview's recent activity feed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentAccessLog {
    pub timestamp: String,
    pub gate_name: String,
    pub location: String,
    pub nfc_id: String,
    pub name: String,
    pub access_status: AccessStatus,
}

// =============================================================================
// DEVICES
// =============================================================================

/// Operational state of an NFC reader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl DeviceStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Maintenance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// An NFC reader as stored by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub tag_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default)]
    pub last_scanned: Option<String>,
    #[serde(default)]
    pub total_scans: Option<u64>,
    #[serde(default)]
    pub last_restart: Option<String>,
    #[serde(default)]
    pub assigned_to: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// `GET /api/devices/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceListResponse {
    pub count: u64,
    pub devices: Vec<Device>,
}

/// Create/update payload for a device.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeviceDraft {
    pub tag_id: String,
    pub name: String,
    pub location: String,
    pub status: DeviceStatus,
    pub assigned_to: Vec<String>,
}

impl DeviceDraft {
    /// Editable fields of an existing device.
    pub fn from_device(device: &Device) -> Self {
        Self {
            tag_id: device.tag_id.clone().unwrap_or_default(),
            name: device.name.clone().unwrap_or_default(),
            location: device.location.clone().unwrap_or_default(),
            status: device.status,
            assigned_to: device.assigned_to.clone(),
        }
    }
}

/// Body sent to `POST /api/devices/`; new devices start with zero scans.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewDevice<'a> {
    #[serde(flatten)]
    pub draft: &'a DeviceDraft,
    pub total_scans: u64,
}

// =============================================================================
// ACCESS LEVELS
// =============================================================================

/// Areas an access level may open.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Permissions {
    pub main_entrance: bool,
    pub server_room: bool,
    pub research_lab: bool,
    pub executive_office: bool,
    pub storage_area: bool,
    pub conference_room: bool,
}

impl Permissions {
    /// Human-readable names of the granted areas.
    pub fn granted(&self) -> Vec<&'static str> {
        [
            (self.main_entrance, "Main Entrance"),
            (self.server_room, "Server Room"),
            (self.research_lab, "Research Lab"),
            (self.executive_office, "Executive Office"),
            (self.storage_area, "Storage Area"),
            (self.conference_room, "Conference Room"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }
}

/// Permission template assignable to users and devices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessLevel {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Permissions,
}

/// `GET /api/access-levels/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccessLevelsResponse {
    pub access_levels: Vec<AccessLevel>,
    pub count: u64,
}

// =============================================================================
// USERS
// =============================================================================

/// A badge holder managed by the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub nfc_id: Option<String>,
    #[serde(default)]
    pub access_level: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_access: Option<String>,
    #[serde(default)]
    pub last_gate_name: Option<String>,
}

/// Server-side paging metadata shared by list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total_pages: u64,
    pub current_page: u64,
    pub per_page: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// `GET /api/users/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserListResponse {
    pub users: Vec<PortalUser>,
    pub pagination: Pagination,
}

/// Create/update payload for a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfc_id: Option<String>,
    pub access_level: String,
    pub active: bool,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserDraft {
    /// Blank form; new users start active.
    pub fn new() -> Self {
        Self { active: true, ..Self::default() }
    }

    /// Editable fields of an existing user.
    pub fn from_user(user: &PortalUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            nfc_id: user.nfc_id.clone(),
            access_level: user.access_level.clone(),
            active: user.active,
            position: user.position.clone(),
            phone: user.phone.clone(),
            department: user.department.clone(),
        }
    }
}

// =============================================================================
// LOGS
// =============================================================================

/// Wall-clock breakdown of a gate event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessTime {
    pub date: String,
    pub time: String,
    pub unix_time: i64,
}

/// Raw card read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardData {
    pub hex_uid: String,
    pub processed_hex: String,
}

/// On-chain anchor of a gate event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockchainData {
    pub tx_hash: String,
    pub block_time: String,
    pub stored_value: String,
}

/// One verification attempt at a gate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationLog {
    #[serde(rename = "_id")]
    pub id: String,
    pub timestamp: String,
    pub access_time: AccessTime,
    pub gate_name: String,
    pub location: String,
    pub nfc_id: String,
    pub card_data: CardData,
    pub blockchain_data: Option<BlockchainData>,
    pub access_method: String,
    pub success: bool,
    pub name: String,
    pub email: String,
    pub position: String,
    pub access_level: String,
    pub access_status: AccessStatus,
}

/// `GET /api/logs/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogsResponse {
    pub logs: Vec<VerificationLog>,
    pub pagination: Pagination,
}

// =============================================================================
// SETTINGS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationSettings {
    pub name: String,
    pub contact_email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockchainSettings {
    pub enabled: bool,
    pub network_endpoint: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub maintenance_mode: bool,
}

/// `GET /api/settings/` response and `PUT /api/settings/` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub organization: OrganizationSettings,
    pub blockchain: BlockchainSettings,
    pub system: SystemSettings,
}

// =============================================================================
// BLOCKCHAIN
// =============================================================================

/// `GET /api/blockchain/chain-info/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainInfo {
    pub status: String,
    pub latency_ms: f64,
    pub chain_id: u64,
    pub latest_block: u64,
    pub blocks_mined_today: u64,
}

/// One on-chain transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockchainTransaction {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: f64,
    pub block: u64,
    pub timestamp: String,
    pub gas_used: u64,
    /// Wei, as a decimal string.
    pub gas_price: String,
}

/// `GET /api/blockchain/transactions/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    pub status: String,
    pub transactions: Vec<BlockchainTransaction>,
    pub pagination: Pagination,
}

// =============================================================================
// SEARCH + SUMMARY
// =============================================================================

/// Body of `POST /api/search/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Search suggestion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub access_level: String,
    pub position: String,
}

/// `POST /api/search/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub users: Vec<SearchUser>,
    pub response_time_ms: f64,
}

/// One row of a user's access history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessHistoryEntry {
    pub timestamp: String,
    pub access_time: AccessTime,
    pub nfc_id: String,
    pub blockchain_data: Option<BlockchainData>,
    pub access_status: AccessStatus,
    pub success: bool,
}

/// Full profile behind a search suggestion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub nfc_id: String,
    pub access_level: String,
    pub created_at: String,
    pub active: bool,
    pub position: String,
    pub updated_at: String,
    pub last_access: String,
    pub last_gate_id: String,
    pub last_gate_name: String,
    pub access_history: Vec<AccessHistoryEntry>,
}

/// `GET /api/search/{id}/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserDetailsResponse {
    pub user: UserDetails,
    pub response_time_ms: f64,
}

/// Body of `POST /api/summarize/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryChatRequest {
    pub userid: String,
    pub message: String,
}

/// `GET /api/summarize/{id}/` and `POST /api/summarize/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummarizeResponse {
    pub user_summary: Option<String>,
    pub response: Option<String>,
    pub response_time_ms: f64,
}
