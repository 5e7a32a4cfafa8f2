//! Read-only component database: physical constants and binary interaction factors.

use crate::species::Component;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Coefficients of the ideal-gas isobaric heat capacity expansion
/// `cp0/R = B + C (D/T / sinh(D/T))² + E (F/T / cosh(F/T))² + G (H/T / sinh(H/T))² + I (J/T / cosh(J/T))²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacityCoefficients {
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
}

impl HeatCapacityCoefficients {
    const fn constant(b: f64) -> Self {
        Self {
            b,
            c: 0.0,
            d: 0.0,
            e: 0.0,
            f: 0.0,
            g: 0.0,
            h: 0.0,
            i: 0.0,
            j: 0.0,
        }
    }
}

/// Physical constants of one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentRecord {
    pub component: Component,
    /// Molar mass M [kg/kmol]
    pub molar_mass: f64,
    /// Compressibility at standard conditions
    pub zc: f64,
    /// Energy parameter E [K]
    pub energy: f64,
    /// Size parameter K [(m³/kmol)^1/3]
    pub size: f64,
    /// Orientation parameter G
    pub orientation: f64,
    /// Quadrupole parameter Q
    pub quadrupole: f64,
    /// High-temperature parameter F
    pub high_temperature: f64,
    /// Dipole parameter S
    pub dipole: f64,
    /// Association parameter W
    pub association: f64,
    pub cp0: HeatCapacityCoefficients,
    /// Critical temperature [K]
    pub critical_temperature: f64,
    /// Critical density [kg/m³]
    pub critical_density: f64,
    /// Pitzer acentric factor
    pub pitzer: f64,
    /// Viscosity transform coefficients d_k
    pub transform: [f64; 6],
    /// Dilute-gas viscosity coefficients a_k, µPa·s in powers of T/100
    pub dilute_viscosity: [f64; 4],
}

/// Binary interaction correction factors for one listed pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryInteraction {
    /// E*_ij
    pub energy: f64,
    /// U*_ij
    pub volume: f64,
    /// K*_ij
    pub size: f64,
    /// G*_ij
    pub orientation: f64,
}

impl BinaryInteraction {
    pub const NEUTRAL: BinaryInteraction = BinaryInteraction {
        energy: 1.0,
        volume: 1.0,
        size: 1.0,
        orientation: 1.0,
    };

    const fn new(energy: f64, volume: f64, size: f64, orientation: f64) -> Self {
        Self {
            energy,
            volume,
            size,
            orientation,
        }
    }
}

/// Component constants plus the pair table, built once and shared read-only.
///
/// Pairs are stored in the direction they are listed. Energy and orientation
/// lookups fall back to the reverse direction; size and volume lookups do not.
#[derive(Debug, Clone)]
pub struct ComponentDatabase {
    records: [ComponentRecord; Component::COUNT],
    pairs: HashMap<(Component, Component), BinaryInteraction>,
}

impl ComponentDatabase {
    pub fn new(
        records: [ComponentRecord; Component::COUNT],
        pairs: impl IntoIterator<Item = ((Component, Component), BinaryInteraction)>,
    ) -> Self {
        Self {
            records,
            pairs: pairs.into_iter().collect(),
        }
    }

    /// GOST 30319 / AGA8 data for the twelve supported components.
    pub fn standard() -> &'static ComponentDatabase {
        static STANDARD: OnceLock<ComponentDatabase> = OnceLock::new();
        STANDARD.get_or_init(|| {
            ComponentDatabase::new(
                STANDARD_RECORDS,
                STANDARD_PAIRS.iter().map(|&(a, b, bp)| ((a, b), bp)),
            )
        })
    }

    pub fn record(&self, component: Component) -> &ComponentRecord {
        &self.records[component.index()]
    }

    pub fn records(&self) -> impl Iterator<Item = &ComponentRecord> + '_ {
        self.records.iter()
    }

    /// Entry for the pair in its listed direction only.
    pub fn pair(&self, first: Component, second: Component) -> Option<&BinaryInteraction> {
        self.pairs.get(&(first, second))
    }

    fn either_direction(&self, a: Component, b: Component) -> Option<&BinaryInteraction> {
        self.pair(a, b).or_else(|| self.pair(b, a))
    }

    /// E*_ij: 1 for identical components, then either listing direction, else 1.
    pub fn energy(&self, a: Component, b: Component) -> f64 {
        if a == b {
            return 1.0;
        }
        self.either_direction(a, b).map_or(1.0, |bp| bp.energy)
    }

    /// G*_ij: 1 for identical components, then either listing direction, else 1.
    pub fn orientation(&self, a: Component, b: Component) -> f64 {
        if a == b {
            return 1.0;
        }
        self.either_direction(a, b).map_or(1.0, |bp| bp.orientation)
    }

    /// K*_ij: listed direction only, else 1.
    pub fn size(&self, a: Component, b: Component) -> f64 {
        self.pair(a, b).map_or(1.0, |bp| bp.size)
    }

    /// U*_ij: listed direction only, else 1.
    pub fn volume(&self, a: Component, b: Component) -> f64 {
        self.pair(a, b).map_or(1.0, |bp| bp.volume)
    }
}

use Component::*;

const STANDARD_RECORDS: [ComponentRecord; Component::COUNT] = [
    ComponentRecord {
        component: Methane,
        molar_mass: 16.043,
        zc: 0.9981,
        energy: 151.318300,
        size: 0.4619255,
        orientation: 0.0,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.00088,
            c: 0.76315,
            d: 820.659,
            e: 0.00460,
            f: 178.410,
            g: 8.74432,
            h: 1062.82,
            i: -4.46921,
            j: 1090.53,
        },
        critical_temperature: 190.564,
        critical_density: 162.66,
        pitzer: 0.064294,
        transform: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        dilute_viscosity: [-0.838029104, 4.88406903, -0.344504244, 0.0151593109],
    },
    ComponentRecord {
        component: Ethane,
        molar_mass: 30.070,
        zc: 0.992,
        energy: 244.166700,
        size: 0.5279209,
        orientation: 0.079300,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.00263,
            c: 4.33939,
            d: 559.314,
            e: 1.23722,
            f: 223.284,
            g: 13.1974,
            h: 1031.38,
            i: -6.01989,
            j: 1071.29,
        },
        critical_temperature: 305.32,
        critical_density: 206.58,
        pitzer: 0.10958,
        transform: [0.04156931, 0.0, 0.06408111, 0.04763455, -0.1889656, 0.1533738],
        dilute_viscosity: [-1.21924490, 4.05145591, -0.200150993, 0.00662746099],
    },
    ComponentRecord {
        component: Propane,
        molar_mass: 44.097,
        zc: 0.9834,
        energy: 298.118300,
        size: 0.5837490,
        orientation: 0.141239,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.02939,
            c: 6.60569,
            d: 479.856,
            e: 3.19700,
            f: 200.893,
            g: 19.1921,
            h: 955.312,
            i: -8.37267,
            j: 1027.29,
        },
        critical_temperature: 369.825,
        critical_density: 220.49,
        pitzer: 0.18426,
        transform: [0.03976538, 0.08375624, 0.1747180, 1.250272, 0.5283498, 0.2458511],
        dilute_viscosity: [0.254518256, 2.54779249, 0.0683095277, 0.0114348793],
    },
    ComponentRecord {
        component: IsoButane,
        molar_mass: 58.123,
        zc: 0.971,
        energy: 324.068900,
        size: 0.6406937,
        orientation: 0.256692,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.06714,
            c: 8.97575,
            d: 438.270,
            e: 5.25156,
            f: 198.018,
            g: 25.1423,
            h: 1905.02,
            i: 16.1388,
            j: 893.765,
        },
        critical_temperature: 407.85,
        critical_density: 224.36,
        pitzer: 0.16157,
        transform: [0.07234927, 0.009435210, -0.03673568, 0.4516722, 0.3272680, -0.6135352],
        dilute_viscosity: [1.04273843, 1.69220741, 0.194077419, -0.0159867334],
    },
    ComponentRecord {
        component: NButane,
        molar_mass: 58.123,
        zc: 0.9682,
        energy: 337.638900,
        size: 0.6341423,
        orientation: 0.281835,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.33944,
            c: 9.44893,
            d: 468.270,
            e: 6.89406,
            f: 183.636,
            g: 24.4618,
            h: 1914.10,
            i: 14.7824,
            j: 903.185,
        },
        critical_temperature: 425.16,
        critical_density: 227.85,
        pitzer: 0.21340,
        transform: [-0.06667775, 0.2100174, 0.06330205, 0.3182660, 0.1474434, -1.113935],
        dilute_viscosity: [-0.524058048, 2.81260308, -0.0496574363, 0.0],
    },
    ComponentRecord {
        component: IsoPentane,
        molar_mass: 72.150,
        zc: 0.953,
        energy: 365.599900,
        size: 0.6738577,
        orientation: 0.332267,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.0,
            c: 11.7618,
            d: 292.503,
            e: 20.1101,
            f: 910.237,
            g: 33.1688,
            h: 1919.37,
            i: 0.0,
            j: 0.0,
        },
        critical_temperature: 460.39,
        critical_density: 236.0,
        pitzer: 0.26196,
        transform: [0.02229787, 0.08380246, 0.04639638, -0.1450583, 0.03725585, -0.4106772],
        dilute_viscosity: [0.550744125, 1.75702204, 0.173363456, -0.0167839786],
    },
    ComponentRecord {
        component: NPentane,
        molar_mass: 72.150,
        zc: 0.945,
        energy: 370.682300,
        size: 0.6798307,
        orientation: 0.366911,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.0,
            c: 8.95043,
            d: 178.670,
            e: 21.8360,
            f: 840.538,
            g: 33.4032,
            h: 1774.25,
            i: 0.0,
            j: 0.0,
        },
        critical_temperature: 469.65,
        critical_density: 232.0,
        pitzer: 0.29556,
        transform: [0.0, 0.1651156, -0.07126922, 0.06698673, -0.5283166, -0.7803174],
        dilute_viscosity: [0.452603096, 1.79775689, 0.157002776, -0.0158057627],
    },
    ComponentRecord {
        component: NHexane,
        molar_mass: 86.177,
        zc: 0.919,
        energy: 402.636293,
        size: 0.7175118,
        orientation: 0.289731,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 4.0,
            c: 11.6977,
            d: 182.326,
            e: 26.8142,
            f: 859.207,
            g: 38.6164,
            h: 1826.59,
            i: 0.0,
            j: 0.0,
        },
        critical_temperature: 507.85,
        critical_density: 233.6,
        pitzer: 0.29965,
        transform: [0.1753529, -0.08018375, -0.03543316, -0.09677546, -0.2015218, -1.206562],
        dilute_viscosity: [0.658064311, 1.50818329, 0.178280027, -0.0161050134],
    },
    ComponentRecord {
        component: Nitrogen,
        molar_mass: 28.0135,
        zc: 0.9997,
        energy: 99.737780,
        size: 0.4479153,
        orientation: 0.027815,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 3.50031,
            c: 0.13732,
            d: 662.738,
            e: 0.14660,
            f: 680.562,
            g: 0.90066,
            h: 1740.06,
            i: 0.0,
            j: 0.0,
        },
        critical_temperature: 126.2,
        critical_density: 313.1,
        pitzer: 0.013592,
        transform: [-0.005352690, 0.09101896, 0.01501200, 0.2640642, -0.1032012, -0.1078872],
        dilute_viscosity: [-0.279070091, 7.81221301, -0.699863421, 0.0378831186],
    },
    ComponentRecord {
        component: CarbonDioxide,
        molar_mass: 44.010,
        zc: 0.9947,
        energy: 241.960600,
        size: 0.4557489,
        orientation: 0.189065,
        quadrupole: 0.690000,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 3.50002,
            c: 2.04452,
            d: 919.306,
            e: -1.06044,
            f: 865.070,
            g: 2.03366,
            h: 483.553,
            i: 0.01393,
            j: 341.109,
        },
        critical_temperature: 304.2,
        critical_density: 468.0,
        pitzer: 0.20625,
        transform: [-0.03468202, 0.1130498, 0.05811886, 0.05767935, -0.1814105, -0.5971794],
        dilute_viscosity: [-0.468233636, 5.37907799, -0.0349633355, -0.0126198032],
    },
    ComponentRecord {
        component: Helium,
        molar_mass: 4.0026,
        zc: 1.0005,
        energy: 2.610111,
        size: 0.3589888,
        orientation: 0.0,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients::constant(2.5),
        critical_temperature: 5.19,
        critical_density: 69.64,
        pitzer: -0.14949,
        transform: [0.299249, -0.1490941, -0.1577329, -0.225324, -0.2731058, -0.8827831],
        dilute_viscosity: [2.95929817, 7.1775132, -0.641191946, 0.0451852767],
    },
    ComponentRecord {
        component: Hydrogen,
        molar_mass: 2.0159,
        zc: 1.0006,
        energy: 26.957940,
        size: 0.3514916,
        orientation: 0.034369,
        quadrupole: 0.0,
        high_temperature: 0.0,
        dipole: 0.0,
        association: 0.0,
        cp0: HeatCapacityCoefficients {
            b: 2.47906,
            c: 0.95806,
            d: 228.734,
            e: 0.45444,
            f: 326.843,
            g: 1.56039,
            h: 1651.71,
            i: -1.3756,
            j: 1671.69,
        },
        critical_temperature: 32.938,
        critical_density: 31.36,
        pitzer: -0.12916,
        transform: [-0.03937273, 0.01532106, -0.03423876, -0.1399209, -0.06955475, -1.049055],
        dilute_viscosity: [1.42410895, 3.03739469, -0.203048737, 0.0106137856],
    },
];

/// Listed pairs as (first, second, E*, U*, K*, G*).
const STANDARD_PAIRS: &[(Component, Component, BinaryInteraction)] = &[
    (Methane, Propane, BinaryInteraction::new(0.994635, 0.990877, 1.007619, 1.0)),
    (Methane, IsoButane, BinaryInteraction::new(1.019530, 1.0, 1.0, 1.0)),
    (Methane, NButane, BinaryInteraction::new(0.989844, 0.992291, 0.997596, 1.0)),
    (Methane, IsoPentane, BinaryInteraction::new(1.002350, 1.0, 1.0, 1.0)),
    (Methane, NPentane, BinaryInteraction::new(0.999268, 1.003670, 1.002529, 1.0)),
    (Methane, NHexane, BinaryInteraction::new(1.107274, 1.302576, 0.982962, 1.0)),
    (Methane, Nitrogen, BinaryInteraction::new(0.971640, 0.886106, 1.003630, 1.0)),
    (Methane, CarbonDioxide, BinaryInteraction::new(0.960644, 0.963827, 0.995933, 0.807653)),
    (Methane, Hydrogen, BinaryInteraction::new(1.170520, 1.156390, 1.023260, 1.957310)),
    (Ethane, Propane, BinaryInteraction::new(1.022560, 1.065173, 0.986893, 1.0)),
    (Ethane, IsoButane, BinaryInteraction::new(1.0, 1.250000, 1.0, 1.0)),
    (Ethane, NButane, BinaryInteraction::new(1.013060, 1.250000, 1.0, 1.0)),
    (Ethane, IsoPentane, BinaryInteraction::new(1.0, 1.250000, 1.0, 1.0)),
    (Ethane, NPentane, BinaryInteraction::new(1.005320, 1.250000, 1.0, 1.0)),
    (Ethane, Nitrogen, BinaryInteraction::new(0.970120, 0.816431, 1.007960, 1.0)),
    (Ethane, CarbonDioxide, BinaryInteraction::new(0.925053, 0.969870, 1.008510, 0.370296)),
    (Ethane, Hydrogen, BinaryInteraction::new(1.164460, 1.616660, 1.020340, 1.0)),
    (Propane, NButane, BinaryInteraction::new(1.004900, 1.0, 1.0, 1.0)),
    (Propane, Nitrogen, BinaryInteraction::new(0.945939, 0.915502, 1.0, 1.0)),
    (Propane, CarbonDioxide, BinaryInteraction::new(0.960237, 1.0, 1.0, 1.0)),
    (Propane, Hydrogen, BinaryInteraction::new(1.034787, 1.0, 1.0, 1.0)),
    (IsoButane, Nitrogen, BinaryInteraction::new(0.946914, 1.0, 1.0, 1.0)),
    (IsoButane, CarbonDioxide, BinaryInteraction::new(0.906849, 1.0, 1.0, 1.0)),
    (IsoButane, Hydrogen, BinaryInteraction::new(1.300000, 1.0, 1.0, 1.0)),
    (NButane, Nitrogen, BinaryInteraction::new(0.973384, 0.993556, 1.0, 1.0)),
    (NButane, CarbonDioxide, BinaryInteraction::new(0.897362, 1.0, 1.0, 1.0)),
    (NButane, Hydrogen, BinaryInteraction::new(1.300000, 1.0, 1.0, 1.0)),
    (IsoPentane, Nitrogen, BinaryInteraction::new(0.959340, 1.0, 1.0, 1.0)),
    (IsoPentane, CarbonDioxide, BinaryInteraction::new(0.726255, 1.0, 1.0, 1.0)),
    (NPentane, Nitrogen, BinaryInteraction::new(0.945520, 1.0, 1.0, 1.0)),
    (NPentane, CarbonDioxide, BinaryInteraction::new(0.859764, 1.0, 1.0, 1.0)),
    (NHexane, CarbonDioxide, BinaryInteraction::new(0.855134, 1.066638, 0.910183, 1.0)),
    (Nitrogen, CarbonDioxide, BinaryInteraction::new(1.022740, 0.835058, 0.982361, 0.982746)),
    (Nitrogen, Hydrogen, BinaryInteraction::new(1.086320, 0.408838, 1.032270, 1.0)),
    (CarbonDioxide, Hydrogen, BinaryInteraction::new(1.281790, 1.0, 1.0, 1.0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_indexed_by_component() {
        let db = ComponentDatabase::standard();
        for c in Component::ALL {
            assert_eq!(db.record(c).component, c);
        }
    }

    #[test]
    fn identical_components_are_neutral() {
        let db = ComponentDatabase::standard();
        for c in Component::ALL {
            assert_eq!(db.energy(c, c), 1.0);
            assert_eq!(db.orientation(c, c), 1.0);
            assert_eq!(db.size(c, c), 1.0);
            assert_eq!(db.volume(c, c), 1.0);
        }
    }

    #[test]
    fn unlisted_pair_is_neutral() {
        let db = ComponentDatabase::standard();
        assert!(db.pair(Methane, Ethane).is_none());
        assert!(db.pair(Ethane, Methane).is_none());
        assert_eq!(db.energy(Methane, Ethane), 1.0);
        assert_eq!(db.orientation(Methane, Ethane), 1.0);
        assert_eq!(db.size(Methane, Ethane), 1.0);
        assert_eq!(db.volume(Methane, Ethane), 1.0);
    }

    #[test]
    fn energy_and_orientation_look_both_ways() {
        let db = ComponentDatabase::standard();
        assert_eq!(db.energy(CarbonDioxide, Methane), 0.960644);
        assert_eq!(db.energy(Methane, CarbonDioxide), 0.960644);
        assert_eq!(db.orientation(CarbonDioxide, Methane), 0.807653);
        assert_eq!(db.orientation(Methane, CarbonDioxide), 0.807653);
    }

    #[test]
    fn size_and_volume_follow_listing_direction() {
        let db = ComponentDatabase::standard();
        assert_eq!(db.size(Methane, Nitrogen), 1.003630);
        assert_eq!(db.volume(Methane, Nitrogen), 0.886106);
        assert_eq!(db.size(Nitrogen, Methane), 1.0);
        assert_eq!(db.volume(Nitrogen, Methane), 1.0);
    }

    #[test]
    fn helium_has_no_pairs() {
        let db = ComponentDatabase::standard();
        for c in Component::ALL {
            assert!(db.pair(Helium, c).is_none());
            assert!(db.pair(c, Helium).is_none());
        }
    }
}
