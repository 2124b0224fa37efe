// Copyright 2024-2025 Irreducible Inc.

use itertools::iproduct;
use koalabear_poseidon2::{
	BoundedVar, Error, KoalaBear, KoalaBearChip, WIDTH,
	constants::INTERNAL_DIAG,
	linear::{external_linear_layer, internal_linear_layer},
};
use proptest::prelude::*;

type Matrix = [[KoalaBear; WIDTH]; WIDTH];
type Layer = fn(&mut KoalaBearChip, &mut [BoundedVar; WIDTH]) -> Result<(), Error>;

const M4: [[u32; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

fn apply(layer: Layer, input: [KoalaBear; WIDTH]) -> [KoalaBear; WIDTH] {
	let mut state = input.map(BoundedVar::from);
	layer(&mut KoalaBearChip::new(), &mut state).unwrap();
	state.map(|lane| lane.to_canonical())
}

fn mat_vec(matrix: &Matrix, input: &[KoalaBear; WIDTH]) -> [KoalaBear; WIDTH] {
	std::array::from_fn(|i| (0..WIDTH).map(|j| matrix[i][j] * input[j]).sum())
}

/// `circ(2 M4, M4, M4, M4)`.
fn external_matrix() -> Matrix {
	let mut matrix = [[KoalaBear::ZERO; WIDTH]; WIDTH];
	for (i, j) in iproduct!(0..WIDTH, 0..WIDTH) {
		let scale = if i / 4 == j / 4 { 2 } else { 1 };
		matrix[i][j] = KoalaBear::new(scale * M4[i % 4][j % 4]);
	}
	matrix
}

/// `Diag(V) + J`.
fn internal_matrix() -> Matrix {
	let mut matrix = [[KoalaBear::ONE; WIDTH]; WIDTH];
	for (i, row) in matrix.iter_mut().enumerate() {
		row[i] += INTERNAL_DIAG[i];
	}
	matrix
}

fn determinant(mut matrix: Matrix) -> KoalaBear {
	let mut det = KoalaBear::ONE;
	for col in 0..WIDTH {
		let Some(pivot) = (col..WIDTH).find(|&row| matrix[row][col] != KoalaBear::ZERO) else {
			return KoalaBear::ZERO;
		};
		if pivot != col {
			matrix.swap(pivot, col);
			det = -det;
		}
		det *= matrix[col][col];
		let inv = matrix[col][col].inverse().unwrap();
		for row in col + 1..WIDTH {
			let factor = matrix[row][col] * inv;
			for k in col..WIDTH {
				let delta = factor * matrix[col][k];
				matrix[row][k] -= delta;
			}
		}
	}
	det
}

fn unit(j: usize) -> [KoalaBear; WIDTH] {
	let mut e = [KoalaBear::ZERO; WIDTH];
	e[j] = KoalaBear::ONE;
	e
}

#[test]
fn test_external_layer_is_dense_matrix() {
	let matrix = external_matrix();
	for j in 0..WIDTH {
		let column = apply(external_linear_layer, unit(j));
		for i in 0..WIDTH {
			assert_eq!(column[i], matrix[i][j], "entry ({i}, {j})");
		}
	}
}

#[test]
fn test_internal_layer_is_dense_matrix() {
	let matrix = internal_matrix();
	let input: [KoalaBear; WIDTH] = std::array::from_fn(|i| KoalaBear::new(i as u32));
	assert_eq!(apply(internal_linear_layer, input), mat_vec(&matrix, &input));
	for j in 0..WIDTH {
		assert_eq!(apply(internal_linear_layer, unit(j)), mat_vec(&matrix, &unit(j)));
	}
}

#[test]
fn test_linear_layers_are_invertible() {
	assert_ne!(determinant(external_matrix()), KoalaBear::ZERO);
	assert_ne!(determinant(internal_matrix()), KoalaBear::ZERO);

	// A rank-deficient matrix is caught.
	let mut singular = internal_matrix();
	singular[1] = singular[0];
	assert_eq!(determinant(singular), KoalaBear::ZERO);
}

proptest! {
	#[test]
	fn test_linear_layers_are_additive(
		a in prop::array::uniform16(0..KoalaBear::ORDER_U32),
		b in prop::array::uniform16(0..KoalaBear::ORDER_U32),
	) {
		let a = KoalaBear::new_array(a);
		let b = KoalaBear::new_array(b);
		let sum: [KoalaBear; WIDTH] = std::array::from_fn(|i| a[i] + b[i]);

		for layer in [
			external_linear_layer::<KoalaBearChip> as Layer,
			internal_linear_layer::<KoalaBearChip> as Layer,
		] {
			let (la, lb) = (apply(layer, a), apply(layer, b));
			let expected: [KoalaBear; WIDTH] = std::array::from_fn(|i| la[i] + lb[i]);
			prop_assert_eq!(apply(layer, sum), expected);
		}
	}
}
