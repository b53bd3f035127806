// Canonical expression-chain walkthrough: builds a small DAG out of every
// primitive and derived operation, differentiates it, and prints the
// results. Expected output:
//
//   24.7041
//   138.8338
//   645.5773

use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let g = &mut Graph::new();

    let a = g.leaf(-4.0);
    let b = g.leaf(2.0);

    let mut c = g.add(a, b)?;
    let ab = g.mul(a, b)?;
    let b_cubed = g.pow_scalar(b, 3.0)?;
    let mut d = g.add(ab, b_cubed)?;

    // c = (c + c) + 1
    let cc = g.add(c, c)?;
    c = g.add_scalar(cc, 1.0)?;

    // c = ((c + 1) + (-a)) + c
    let c_plus_one = g.add_scalar(c, 1.0)?;
    let minus_a = g.neg(a)?;
    let partial = g.add(c_plus_one, minus_a)?;
    c = g.add(partial, c)?;

    // d = d + (2d + relu(b + a))
    let two_d = g.mul_scalar(d, 2.0)?;
    let b_plus_a = g.add(b, a)?;
    let gate = g.relu(b_plus_a)?;
    let bump = g.add(two_d, gate)?;
    d = g.add(d, bump)?;

    // d = d + (3d + relu(b - a))
    let three_d = g.mul_scalar(d, 3.0)?;
    let b_minus_a = g.sub(b, a)?;
    let gate = g.relu(b_minus_a)?;
    let bump = g.add(three_d, gate)?;
    d = g.add(d, bump)?;

    let e = g.sub(c, d)?;
    let f = g.pow_scalar(e, 2.0)?;
    let mut out = g.div_scalar(f, 2.0)?;
    let ten = g.leaf(10.0);
    let tail = g.div(ten, f)?;
    out = g.add(out, tail)?;

    println!("{:.4}", g.data(out)?);

    g.backward(out)?;

    println!("{:.4}", g.grad(a)?);
    println!("{:.4}", g.grad(b)?);

    Ok(())
}
