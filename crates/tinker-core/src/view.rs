//! View identifier enum.

use std::fmt;

use serde::Serialize;

/// Identifies each dashboard view a navigation path can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewId {
    Dashboard,
    SensorList,
    SensorDetail,
    SpaceList,
    SpaceDetail,
}

impl ViewId {
    /// All views in route-table order.
    pub const ALL: [ViewId; 5] = [
        Self::Dashboard,
        Self::SensorList,
        Self::SensorDetail,
        Self::SpaceList,
        Self::SpaceDetail,
    ];

    /// Name used for named navigation.
    pub fn route_name(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::SensorList => "Sensors",
            Self::SensorDetail => "Sensor",
            Self::SpaceList => "Spaces",
            Self::SpaceDetail => "Space",
        }
    }

    /// View from its route name. Case-sensitive.
    pub fn from_route_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.route_name() == name)
    }

    /// Whether this view shows a single entity picked by an `:id` segment.
    pub fn is_detail(self) -> bool {
        matches!(self, Self::SensorDetail | Self::SpaceDetail)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dashboard => "Dashboard",
            Self::SensorList => "SensorList",
            Self::SensorDetail => "SensorDetail",
            Self::SpaceList => "SpaceList",
            Self::SpaceDetail => "SpaceDetail",
        };
        f.write_str(label)
    }
}
