// End-to-end training loop: loads a small two-class point set from CSV,
// fits a [2, 8, 1] MLP with hinge loss + L2 penalty, and reclaims the
// per-epoch subgraph after every update so the arena stays bounded.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{hinge_loss, l2_penalty, Mlp, Module};
use scalargrad_core::optim::Sgd;
use scalargrad_core::{Graph, ValueId};
use scalargrad_data::{leaf_rows, read_csv, shuffled_indices};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = concat!(env!("CARGO_MANIFEST_DIR"), "/examples/data");
    let mut points = read_csv(format!("{base}/points.csv"))?;
    let mut targets = read_csv(format!("{base}/labels.csv"))?;

    let mut rng = StdRng::seed_from_u64(1337);

    // Randomize sample order once up front.
    let order = shuffled_indices(points.len(), &mut rng);
    points = order.iter().map(|&i| points[i].clone()).collect();
    targets = order.iter().map(|&i| targets[i].clone()).collect();

    let graph = &mut Graph::new();
    let inputs = leaf_rows(graph, &points);
    let labels: Vec<ValueId> = leaf_rows(graph, &targets).into_iter().flatten().collect();

    let model = Mlp::new(graph, &mut rng, &[2, 8, 1]);
    let params = model.parameters();
    let mut optimizer = Sgd::new(1.0);

    let epochs = 60;
    for epoch in 0..epochs {
        let start = graph.checkpoint();

        let mut scores = Vec::with_capacity(inputs.len());
        for row in &inputs {
            scores.push(model.score(graph, row)?);
        }
        let data_loss = hinge_loss(graph, &scores, &labels)?;
        let reg_loss = l2_penalty(graph, &params, 1e-4)?;
        let loss = graph.add(data_loss, reg_loss)?;

        let mut correct = 0usize;
        for (&score, &label) in scores.iter().zip(&labels) {
            if (graph.data(score)? > 0.0) == (graph.data(label)? > 0.0) {
                correct += 1;
            }
        }
        let accuracy = correct as f64 / scores.len() as f64;

        optimizer.zero_grad(graph, &params)?;
        graph.backward(loss)?;
        optimizer.set_lr(1.0 - 0.9 * epoch as f64 / epochs as f64);
        optimizer.step(graph, &params)?;

        println!(
            "epoch {:3}  loss {:.4}  accuracy {:.0}%  (arena: {} live / {} ids)",
            epoch,
            graph.data(loss)?,
            accuracy * 100.0,
            graph.live_len(),
            graph.len(),
        );

        // Drop everything this epoch allocated; parameters and inputs
        // sit below `start` and survive.
        graph.release(loss, start)?;
    }

    Ok(())
}
