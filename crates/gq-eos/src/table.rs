//! Universal dimensionless term table (AGA8-DC92, 58 rows).
//!
//! Identical for every mixture. Rows 0..=11 only feed the second virial
//! contribution, rows 12..=17 feed both the virial and the exponential terms,
//! rows 18..=57 only the exponential terms.

/// One row of the expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermRow {
    /// Leading coefficient a_n
    pub a: f64,
    /// Density exponent b_n
    pub b: f64,
    /// Exponential factor c_n
    pub c: f64,
    /// Exponential density exponent k_n
    pub k: f64,
    /// Temperature exponent u_n
    pub u: f64,
    /// Orientation exponent g_n
    pub g: f64,
    /// Quadrupole exponent q_n
    pub q: f64,
    /// High-temperature exponent f_n
    pub f: f64,
    /// Dipole exponent s_n
    pub s: f64,
    /// Association exponent w_n
    pub w: f64,
}

pub const TERM_COUNT: usize = 58;

/// Last row of the virial-only block.
pub const VIRIAL_ONLY_END: usize = 11;
/// Last row of the mixed virial/exponential block.
pub const MIXED_END: usize = 17;

#[allow(clippy::too_many_arguments)]
const fn row(
    a: f64,
    b: f64,
    c: f64,
    k: f64,
    u: f64,
    g: f64,
    q: f64,
    f: f64,
    s: f64,
    w: f64,
) -> TermRow {
    TermRow {
        a,
        b,
        c,
        k,
        u,
        g,
        q,
        f,
        s,
        w,
    }
}

#[rustfmt::skip]
pub const TERM_TABLE: [TermRow; TERM_COUNT] = [
    //   a                 b    c    k    u     g    q    f    s    w
    row( 0.1538326,        1.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 1.341953,         1.0, 0.0, 0.0,  0.5, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-2.998583,         1.0, 0.0, 0.0,  1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.04831228,       1.0, 0.0, 0.0,  3.5, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.3757965,        1.0, 0.0, 0.0, -0.5, 1.0, 0.0, 0.0, 0.0, 0.0),
    row(-1.589575,         1.0, 0.0, 0.0,  4.5, 1.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.05358847,       1.0, 0.0, 0.0,  0.5, 0.0, 1.0, 0.0, 0.0, 0.0),
    row( 0.88659463,       1.0, 0.0, 0.0,  7.5, 0.0, 0.0, 0.0, 1.0, 0.0),
    row(-0.71023704,       1.0, 0.0, 0.0,  9.5, 0.0, 0.0, 0.0, 1.0, 0.0),
    row(-1.471722,         1.0, 0.0, 0.0,  6.0, 0.0, 0.0, 0.0, 0.0, 1.0),
    row( 1.32185035,       1.0, 0.0, 0.0, 12.0, 0.0, 0.0, 0.0, 0.0, 1.0),
    row(-0.78665925,       1.0, 0.0, 0.0, 12.5, 0.0, 0.0, 0.0, 0.0, 1.0),
    row( 2.29129e-9,       1.0, 1.0, 3.0, -6.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    row( 0.1576724,        1.0, 1.0, 2.0,  2.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.4363864,        1.0, 1.0, 2.0,  3.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.04408159,       1.0, 1.0, 2.0,  2.0, 0.0, 1.0, 0.0, 0.0, 0.0),
    row(-0.003433888,      1.0, 1.0, 4.0,  2.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.03205905,       1.0, 1.0, 4.0, 11.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.02487355,       2.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.07332279,       2.0, 0.0, 0.0,  0.5, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.001600573,      2.0, 1.0, 2.0,  0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.6424706,        2.0, 1.0, 2.0,  4.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.4162601,        2.0, 1.0, 2.0,  6.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.06689957,       2.0, 1.0, 4.0, 21.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.2791795,        2.0, 1.0, 4.0, 23.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.6966051,        2.0, 1.0, 4.0, 22.0, 0.0, 1.0, 0.0, 0.0, 0.0),
    row(-0.002860589,      2.0, 1.0, 4.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    row(-0.008098836,      3.0, 0.0, 0.0, -0.5, 0.0, 1.0, 0.0, 0.0, 0.0),
    row( 3.150547,         3.0, 1.0, 1.0,  7.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.007224479,      3.0, 1.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    row(-0.7057529,        3.0, 1.0, 2.0,  6.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.5349792,        3.0, 1.0, 2.0,  4.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.07931491,       3.0, 1.0, 3.0,  1.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row(-1.418465,         3.0, 1.0, 3.0,  9.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row(-5.99905e-17,      3.0, 1.0, 4.0,-13.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    row( 0.1058402,        3.0, 1.0, 4.0, 21.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.03431729,       3.0, 1.0, 4.0,  8.0, 0.0, 1.0, 0.0, 0.0, 0.0),
    row(-0.007022847,      4.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.02495587,       4.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.04296818,       4.0, 1.0, 2.0,  2.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.7465453,        4.0, 1.0, 2.0,  7.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.2919613,        4.0, 1.0, 2.0,  9.0, 0.0, 1.0, 0.0, 0.0, 0.0),
    row( 7.294616,         4.0, 1.0, 4.0, 22.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-9.936757,         4.0, 1.0, 4.0, 23.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.005399808,      5.0, 0.0, 0.0,  1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.2432567,        5.0, 1.0, 2.0,  9.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.04987016,       5.0, 1.0, 2.0,  3.0, 0.0, 1.0, 0.0, 0.0, 0.0),
    row( 0.003733797,      5.0, 1.0, 4.0,  8.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 1.874951,         5.0, 1.0, 4.0, 23.0, 0.0, 1.0, 0.0, 0.0, 0.0),
    row( 0.002168144,      6.0, 0.0, 0.0,  1.5, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.6587164,        6.0, 1.0, 2.0,  5.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.000205518,      7.0, 0.0, 0.0, -0.5, 0.0, 1.0, 0.0, 0.0, 0.0),
    row( 0.009776195,      7.0, 1.0, 2.0,  4.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.02048708,       8.0, 1.0, 1.0,  7.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.01557322,       8.0, 1.0, 2.0,  3.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.006862415,      8.0, 1.0, 2.0,  0.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    row(-0.001226752,      9.0, 1.0, 2.0,  1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    row( 0.002850908,      9.0, 1.0, 2.0,  0.0, 0.0, 1.0, 0.0, 0.0, 0.0),
];
