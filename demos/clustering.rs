//! DBSCAN on a simple 2D dataset: two clusters and an outlier.

use denscan::{Dbscan, Label};

fn main() {
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Outlier
        vec![10.0, 0.0],
    ];

    // --- Euclidean (order 2, the default) ---
    let mut dbscan = Dbscan::new(1.0, 3);
    let labels = dbscan.fit_predict(&data).unwrap();
    println!("=== DBSCAN (eps=1.0, min_points=3, Euclidean) ===");
    report(&data, &labels);
    println!(
        "clusters: {}, silhouette: {:.3}",
        dbscan.n_clusters().unwrap(),
        dbscan.score().unwrap()
    );

    // --- Taxicab (order 1) ---
    let mut taxicab = Dbscan::new(1.0, 3).with_order(1);
    let labels = taxicab.fit_predict(&data).unwrap();
    println!("\n=== DBSCAN (eps=1.0, min_points=3, taxicab) ===");
    report(&data, &labels);

    // --- Labels as a column, predict by exact lookup ---
    let column: Vec<i64> = dbscan
        .labels()
        .unwrap()
        .iter()
        .map(|l| l.to_index())
        .collect();
    println!("\nlabel column: {column:?}");

    let looked_up = dbscan.predict(&[vec![5.0, 5.0]]).unwrap();
    println!("predict([5.0, 5.0]) => {:?}", looked_up[0]);
}

fn report(data: &[Vec<f32>], labels: &[Label]) {
    for (i, label) in labels.iter().enumerate() {
        let tag = match label {
            Label::Noise => "NOISE".to_string(),
            Label::Cluster(k) => format!("cluster {k}"),
        };
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => {}",
            i, data[i][0], data[i][1], tag
        );
    }
}
