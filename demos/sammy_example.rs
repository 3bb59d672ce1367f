//! Normalization methods in the two count example.
//!
//! Two counts share a normalization constant. With a small normalization uncertainty the methods agree closely,
//! with a large one the correlation between the normalized counts dominates.

use ppp_estimate::matrix::Array;
use ppp_estimate::models::Method;
use ppp_estimate::ppp::detect_ppp;

fn main() {
    let r = [10000., 12100.];
    let dr = [100., 110.];
    let n = 100.;

    for &dn in [0.5, 10.].iter() {
        println!("Normalization {} +/- {}", n, dn);
        for &(name, method) in [
            ("1", Method::One),
            ("2", Method::Two),
            ("2a", Method::TwoA),
            ("2b", Method::TwoB),
        ]
        .iter()
        {
            let posterior = method.solve(&r, &dr, n, dn, false).unwrap();
            print!("Method {}\n{}", name, posterior.report());
        }

        // Covariance of the normalized counts
        let c = (dn * dn) / (n * n);
        let d = [r[0] / n, r[1] / n];
        let v: Array<f64> = vec![
            vec![dr[0] * dr[0] / (n * n) + c * d[0] * d[0], c * d[0] * d[1]],
            vec![c * d[0] * d[1], dr[1] * dr[1] / (n * n) + c * d[1] * d[1]],
        ]
        .into();
        println!("PPP {:?}\n", detect_ppp(&v));
    }
}
