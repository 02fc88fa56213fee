//// Physical constants (S.I. units)
pub const G_SI : f64 = 6.67430e-11;  // m^3.kg^-1.s^-2
pub const HOUR: f64 = 3600.; // s
pub const DAY: f64 = 24.*HOUR; // s

//// Default run
pub const DEFAULT_TIME_STEP : f64 = DAY; // s
pub const DEFAULT_STEPS : u32 = 365; // one year with daily steps

////////////////////////////////////////////////////////////////////////////////
// Solar system
// Masses in kg, distances to the Sun in m, mean orbital speeds in m/s
pub const M_SUN : f64 = 1.989e30;
pub const M_MERCURY : f64 = 3.285e23;
pub const M_VENUS : f64 = 4.867e24;
pub const M_EARTH : f64 = 5.972e24;
pub const M_MARS : f64 = 6.39e23;
pub const M_JUPITER : f64 = 1.898e27;
pub const M_SATURN : f64 = 5.683e26;
pub const M_URANUS : f64 = 8.681e25;
pub const M_NEPTUNE : f64 = 1.024e26;

pub const D_MERCURY : f64 = 57.91e9;
pub const D_VENUS : f64 = 108.2e9;
pub const D_EARTH : f64 = 149.6e9;
pub const D_MARS : f64 = 227.9e9;
pub const D_JUPITER : f64 = 778.5e9;
pub const D_SATURN : f64 = 1.434e12;
pub const D_URANUS : f64 = 2.871e12;
pub const D_NEPTUNE : f64 = 4.495e12;

pub const V_MERCURY : f64 = 47400.;
pub const V_VENUS : f64 = 35020.;
pub const V_EARTH : f64 = 29783.;
pub const V_MARS : f64 = 24007.;
pub const V_JUPITER : f64 = 13070.;
pub const V_SATURN : f64 = 9680.;
pub const V_URANUS : f64 = 6800.;
pub const V_NEPTUNE : f64 = 5430.;

// Moons: distance and speed relative to their host planet
pub const M_MOON : f64 = 7.348e22;
pub const D_MOON : f64 = 384400000.;
pub const V_MOON : f64 = 1022.;
pub const M_IO : f64 = 8.931e22;
pub const D_IO : f64 = 421700000.;
pub const V_IO : f64 = 17320.;
pub const M_EUROPA : f64 = 4.799e22;
pub const D_EUROPA : f64 = 671100000.;
pub const V_EUROPA : f64 = 13740.;
pub const M_GANYMEDE : f64 = 1.482e23;
pub const D_GANYMEDE : f64 = 1070400000.;
pub const V_GANYMEDE : f64 = 10870.;
pub const M_CALLISTO : f64 = 1.076e23;
pub const D_CALLISTO : f64 = 1882700000.;
pub const V_CALLISTO : f64 = 8200.;
////////////////////////////////////////////////////////////////////////////////
