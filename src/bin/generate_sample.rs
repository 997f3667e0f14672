//! Write a deterministic sample CSV of sign-in audit events, for demos and
//! manual testing of the viewer.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Pick an index according to relative weights.
    fn pick(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut roll = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let users = ["alice", "bob", "carol", "dave", "erin"];
    let user_weights = [5.0, 3.0, 3.0, 2.0, 1.0];

    let applications = ["Outlook", "Teams", "SharePoint", "Azure Portal"];
    let app_weights = [4.0, 3.0, 2.0, 1.0];

    let statuses = ["Success", "Failure", "Interrupted"];
    let status_weights = [8.0, 1.5, 0.5];

    let locations = ["New York, US", "London, GB", "Berlin, DE", ""];
    let location_weights = [5.0, 2.0, 2.0, 1.0];

    let client_apps = ["Browser", "Mobile Apps and Desktop clients", "Other clients"];
    let client_weights = [6.0, 3.0, 1.0];

    let output_path = "sample_signins.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["user", "application", "status", "location", "client_app"])
        .expect("Failed to write header");

    let n_rows = 500;
    for _ in 0..n_rows {
        writer
            .write_record([
                users[rng.pick(&user_weights)],
                applications[rng.pick(&app_weights)],
                statuses[rng.pick(&status_weights)],
                locations[rng.pick(&location_weights)],
                client_apps[rng.pick(&client_weights)],
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {n_rows} sign-in events to {output_path}");
}
