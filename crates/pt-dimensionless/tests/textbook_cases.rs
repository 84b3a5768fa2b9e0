//! Cross-checks between the ratio and transport-property forms of each group.

use pt_core::{Tolerances, nearly_equal};
use pt_dimensionless::{
    DimensionlessError, PecletHeat, PecletHeatParams, PecletMass, Stanton, StantonParams, lewis,
    nusselt, peclet_heat, peclet_heat_from, peclet_mass, prandtl, reynolds, schmidt, stanton,
    stanton_from,
};

// Water near 20 °C flowing through a 25 mm tube.
const RHO: f64 = 998.2;
const MU: f64 = 1.002e-3;
const CP: f64 = 4182.0;
const K: f64 = 0.598;
const D_AB: f64 = 1.0e-9;
const U: f64 = 0.8;
const L: f64 = 0.025;
const H: f64 = 3500.0;

fn close(a: f64, b: f64) -> bool {
    nearly_equal(
        a,
        b,
        Tolerances {
            abs: 1e-12,
            rel: 1e-10,
        },
    )
}

#[test]
fn peclet_heat_forms_agree() {
    let re = reynolds(RHO, U, L, MU);
    let pr = prandtl(CP, MU, K);
    let alpha = K / (RHO * CP);

    let by_ratios = peclet_heat(PecletHeat::Ratios { re, pr });
    let by_transport = peclet_heat(PecletHeat::Transport { u: U, alpha, l: L });
    assert!(close(by_ratios, by_transport), "{by_ratios} vs {by_transport}");
}

#[test]
fn peclet_mass_forms_agree() {
    let re = reynolds(RHO, U, L, MU);
    let sc = schmidt(MU, RHO, D_AB);

    let by_ratios = peclet_mass(PecletMass::Ratios { re, sc });
    let by_transport = peclet_mass(PecletMass::Transport { u: U, d: D_AB, l: L });
    assert!(close(by_ratios, by_transport), "{by_ratios} vs {by_transport}");
}

#[test]
fn stanton_forms_agree() {
    let nu = nusselt(H, L, K);
    let pe = peclet_heat(PecletHeat::Ratios {
        re: reynolds(RHO, U, L, MU),
        pr: prandtl(CP, MU, K),
    });

    let by_ratios = stanton(Stanton::Ratios { nu, pe });
    let by_transport = stanton(Stanton::Transport {
        h: H,
        rho: RHO,
        u: U,
        cp: CP,
    });
    assert!(close(by_ratios, by_transport), "{by_ratios} vs {by_transport}");
}

#[test]
fn lewis_is_mass_over_thermal_diffusivity() {
    // Pr/Sc = (Cp·μ/k)·(ρ·D/μ) = D/α
    let le = lewis(prandtl(CP, MU, K), schmidt(MU, RHO, D_AB));
    let alpha = K / (RHO * CP);
    assert!(close(le, D_AB / alpha), "{le} vs {}", D_AB / alpha);
    assert!(le < 1.0);
}

#[test]
fn documented_examples() {
    assert_eq!(peclet_heat_from(PecletHeatParams::default().re(2.0).pr(3.0)), Ok(6.0));
    assert_eq!(
        peclet_heat_from(PecletHeatParams::default().u(4.0).alpha(2.0).l(1.0)),
        Ok(2.0)
    );
    assert_eq!(stanton_from(StantonParams::default().nu(4.0).pe(2.0)), Ok(2.0));
    assert_eq!(
        stanton_from(StantonParams::default().h(10.0).rho(1.0).u(2.0).cp(5.0)),
        Ok(1.0)
    );
}

#[test]
fn missing_parameters_are_reported() {
    let err = peclet_heat_from(PecletHeatParams::default()).unwrap_err();
    assert!(matches!(err, DimensionlessError::InvalidArgs { .. }));
    assert!(
        err.to_string()
            .contains("not enough parameters provided or wrong combination")
    );
}
