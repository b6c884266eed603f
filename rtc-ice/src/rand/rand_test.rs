use super::*;

#[test]
fn test_random_generator_collision() {
    let test_cases: Vec<(&str, fn() -> String)> = vec![
        ("CandidateID", generate_cand_id),
        ("PWD", generate_pwd),
        ("Ufrag", generate_ufrag),
    ];

    const N: usize = 10;
    const ITERATION: usize = 10;

    for (name, gen_fn) in test_cases {
        for _ in 0..ITERATION {
            let rs: Vec<String> = (0..N).map(|_| gen_fn()).collect();

            assert_eq!(rs.len(), N, "{name} Failed to generate randoms");

            for i in 0..N {
                for j in i + 1..N {
                    assert_ne!(
                        rs[i], rs[j],
                        "{}: generateRandString caused collision: {} == {}",
                        name, rs[i], rs[j],
                    );
                }
            }
        }
    }
}

#[test]
fn test_random_generator_lengths() {
    assert_eq!(generate_ufrag().len(), GENERATED_UFRAG_LEN);
    assert_eq!(generate_pwd().len(), GENERATED_PWD_LEN);

    let id = generate_cand_id();
    assert!(id.starts_with(CANDIDATE_ID_PREFIX), "{id}");
    assert_eq!(id.len(), "candidate:".len() + 32);
    assert!(
        id[CANDIDATE_ID_PREFIX.len()..]
            .bytes()
            .all(|b| ICE_CHARS.contains(&b)),
        "{id}"
    );
}
