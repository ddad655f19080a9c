//! Static body parameter table

/// Immutable descriptor for one body in the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyParams {
    pub name: &'static str,
    /// Distance from the parent's centre in world units.
    pub distance: f32,
    /// Largest dimension of the body after normalization, in world units.
    pub scale: f32,
    /// Revolution period in days. `None` for the central body.
    pub orbit_period: Option<f64>,
    /// Spin period in days. Negative periods spin retrograde.
    pub rot_period: Option<f64>,
}

impl BodyParams {
    pub fn is_central(&self) -> bool {
        self.orbit_period.is_none()
    }

    /// Asset path under the asset root, e.g. `Planets/earth.glb`.
    pub fn asset_path(&self, asset_dir: &str) -> String {
        let file = format!("{}.glb", self.name.to_lowercase());
        if asset_dir.is_empty() {
            file
        } else {
            format!("{}/{}", asset_dir.trim_end_matches('/'), file)
        }
    }
}

pub const SUN_NAME: &str = "Sun";
pub const EARTH_NAME: &str = "Earth";
pub const MOON_NAME: &str = "Moon";

/// Earth's axial tilt applied to its model node.
pub const EARTH_AXIAL_TILT_DEG: f32 = 23.5;

pub static PLANETS: [BodyParams; 9] = [
    BodyParams {
        name: SUN_NAME,
        distance: 0.0,
        scale: 200.0,
        orbit_period: None,
        rot_period: None,
    },
    BodyParams {
        name: "Mercury",
        distance: 300.0,
        scale: 8.0,
        orbit_period: Some(88.0),
        rot_period: Some(58.6),
    },
    BodyParams {
        name: "Venus",
        distance: 400.0,
        scale: 15.0,
        orbit_period: Some(225.0),
        rot_period: Some(-243.0),
    },
    BodyParams {
        name: EARTH_NAME,
        distance: 500.0,
        scale: 20.0,
        orbit_period: Some(365.25),
        rot_period: Some(1.0),
    },
    BodyParams {
        name: "Mars",
        distance: 600.0,
        scale: 10.0,
        orbit_period: Some(687.0),
        rot_period: Some(1.03),
    },
    BodyParams {
        name: "Jupiter",
        distance: 750.0,
        scale: 50.0,
        orbit_period: Some(4333.0),
        rot_period: Some(0.41),
    },
    BodyParams {
        name: "Saturn",
        distance: 850.0,
        scale: 60.0,
        orbit_period: Some(10759.0),
        rot_period: Some(0.44),
    },
    BodyParams {
        name: "Uranus",
        distance: 950.0,
        scale: 35.0,
        orbit_period: Some(30687.0),
        rot_period: Some(-0.72),
    },
    BodyParams {
        name: "Neptune",
        distance: 1050.0,
        scale: 30.0,
        orbit_period: Some(60190.0),
        rot_period: Some(0.67),
    },
];

/// The Moon orbits Earth, at 0.3x Earth's visual scale.
pub static MOON: BodyParams = BodyParams {
    name: MOON_NAME,
    distance: 50.0,
    scale: 20.0 * 0.3,
    orbit_period: Some(27.3),
    rot_period: Some(27.3),
};

/// Every body a user can select, in display order.
pub fn selectable_bodies() -> impl Iterator<Item = &'static BodyParams> {
    PLANETS.iter().chain(std::iter::once(&MOON))
}
