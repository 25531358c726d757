/// Value type of a filter field, used to pick a generic input control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Text,
    Number,
    Date,
    Set,
}

/// Specialized pickers the advanced layout can show instead of a generic input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    ActiveUsers,
    ProjectMembers,
    Milestones,
    TaskStatuses,
}

/// Descriptor for one filter field exposed by the advanced layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: &'static str,
    pub label: &'static str,
    pub field_type: ParamType,
}

impl Param {
    pub const fn new(key: &'static str, label: &'static str, field_type: ParamType) -> Self {
        Self {
            key,
            label,
            field_type,
        }
    }
}

pub(super) const LEAD_PARAMS: &[Param] = &[
    Param::new("lead-name", "Name", ParamType::Text),
    Param::new("lead-account-name", "Account Name", ParamType::Text),
    Param::new("lead-website", "Website", ParamType::Text),
    Param::new("lead-anyemail", "Any Email", ParamType::Text),
    Param::new("lead-anyphone", "Any Phone", ParamType::Text),
    Param::new("lead-billingcountry", "Billing Country", ParamType::Text),
    Param::new("lead-shippingcountry", "Shipping Country", ParamType::Text),
    Param::new("lead-status", "Status", ParamType::Set),
    Param::new("lead-source", "Source", ParamType::Set),
    Param::new("lead-assignuser", "Assignee", ParamType::Set),
];

pub(super) const TASK_PARAMS: &[Param] = &[
    Param::new("task-assignuser", "Assignee", ParamType::Set),
    Param::new("task-createdtime", "Created Time", ParamType::Date),
    Param::new("task-duedate", "Due Date", ParamType::Date),
    Param::new("task-lastupdatedtime", "Last Updated", ParamType::Date),
    Param::new("task-status", "Status", ParamType::Set),
    Param::new("task-startdate", "Start Date", ParamType::Date),
    Param::new("task-enddate", "End Date", ParamType::Date),
    Param::new("task-actualstartdate", "Actual Start", ParamType::Date),
    Param::new("task-actualenddate", "Actual End", ParamType::Date),
    Param::new("task-milestone", "Milestone", ParamType::Set),
    Param::new("task-key", "Task Key", ParamType::Number),
];

pub(super) const ACCOUNT_PARAMS: &[Param] = &[
    Param::new("account-name", "Name", ParamType::Text),
    Param::new("account-website", "Website", ParamType::Text),
    Param::new("account-anyphone", "Any Phone", ParamType::Text),
    Param::new("account-anyemail", "Any Email", ParamType::Text),
    Param::new("account-anycity", "Any City", ParamType::Text),
    Param::new("account-billingcountry", "Billing Country", ParamType::Text),
    Param::new("account-shippingcountry", "Shipping Country", ParamType::Text),
    Param::new("account-type", "Type", ParamType::Set),
    Param::new("account-industry", "Industry", ParamType::Set),
    Param::new("account-assignuser", "Assignee", ParamType::Set),
];
