use globopt_de::{DEConfigBuilder, differential_evolution};
use globopt_testfunctions::{create_bounds, schaffer_n2};

#[test]
fn test_de_schaffer_n2() {
	// Wide bounds, many ripples around the single global minimum.
	let b2 = create_bounds(2, -100.0, 100.0);
	let c2 = DEConfigBuilder::new().seed(41).maxiter(2000).breakafter(200).build();

	let report = differential_evolution(&schaffer_n2, &b2, c2).unwrap();
	assert!(report.fun < 1e-6, "fitness too high: {}", report.fun);
	assert!(report.x[0].abs() < 1e-2, "x[0] = {}", report.x[0]);
	assert!(report.x[1].abs() < 1e-2, "x[1] = {}", report.x[1]);
}
