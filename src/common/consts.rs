//! Static constants.

use crate::num::Decimal;
use core::str::FromStr;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: Decimal = Decimal::from_u64(1);

    /// 2
    pub(crate) static ref TWO: Decimal = Decimal::from_u64(2);

    /// 3
    pub(crate) static ref THREE: Decimal = Decimal::from_u64(3);

    /// 4
    pub(crate) static ref FOUR: Decimal = Decimal::from_u64(4);

    /// 0.5
    pub(crate) static ref HALF: Decimal = Decimal::from_str("0.5").expect("Constant HALF initialization.");

    /// Omega constant W(1), used as the starting point of Lambert W iteration.
    pub(crate) static ref OMEGA: Decimal = Decimal::from_str("0.56714329040978387299996866221035554975381578").expect("Constant OMEGA initialization.");

    /// g + 0.5 of the Lanczos approximation with g = 7.
    pub(crate) static ref LANCZOS_G_HALF: Decimal = Decimal::from_str("7.5").expect("Constant LANCZOS_G_HALF initialization.");

    /// Leading coefficient of the Lanczos approximation with g = 7.
    pub(crate) static ref LANCZOS_C0: Decimal = Decimal::from_str(
        "0.9999999999998099322768470047347829718009602570498980962898849358"
    ).expect("Constant LANCZOS_C0 initialization.");

    /// Coefficients of the Lanczos approximation with g = 7.
    pub(crate) static ref LANCZOS_COEFFS: [Decimal; 8] = [
        "676.5203681218850985670091904440190381974449058924722569853678707",
        "-1259.139216722402870471560787552828410476730722910298369550296701",
        "771.3234287776530788486528258894307395627292390168566479072763666",
        "-176.6150291621405990658455135399941244433015398373585840448427972",
        "12.50734327868690481445893685327163629939919667813089937179501692",
        "-0.1385710952657201168955470698506320982416866194189568573645197562",
        "0.000009984369578019570859562668995694018788834042365371027657733820183",
        "0.0000001505632735149311558338355775386439360927036032480858107693939127",
    ].map(|s| Decimal::from_str(s).expect("Constant LANCZOS_COEFFS initialization."));
}
