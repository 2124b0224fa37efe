// Copyright 2024-2025 Irreducible Inc.

//! Fixed parameters of Poseidon2 over KoalaBear with a 16-element state.

use koalabear_field::KoalaBear;

pub const WIDTH: usize = 16;
pub const NUM_EXTERNAL_ROUNDS: usize = 8;
pub const HALF_EXTERNAL_ROUNDS: usize = NUM_EXTERNAL_ROUNDS / 2;
pub const NUM_INTERNAL_ROUNDS: usize = 13;
pub const NUM_ROUNDS: usize = NUM_EXTERNAL_ROUNDS + NUM_INTERNAL_ROUNDS;

/// Degree of the S-box monomial. `x -> x^3` is a permutation because `p - 1 = 127 * 2^24`.
pub const SBOX_DEGREE: u64 = 3;

const P: u32 = KoalaBear::ORDER_U32;

/// The internal layer multiplies by `1 + Diag(V)` where
/// `V = [-2, 1, 2, 1/2, 3, 4, -1/2, -3, -4, 1/2^8, 1/8, 1/2^24, -1/2^8, -1/8, -1/16, -1/2^24]`.
///
/// `p - 1 = 127 * 2^24`, so for `n <= 24` we have `-1/2^n = (p - 1) >> n` and
/// `1/2^n = p - ((p - 1) >> n)`.
pub const INTERNAL_DIAG: [KoalaBear; WIDTH] = KoalaBear::new_array([
	P - 2,
	1,
	2,
	(P + 1) >> 1,
	3,
	4,
	(P - 1) >> 1,
	P - 3,
	P - 4,
	P - ((P - 1) >> 8),
	P - ((P - 1) >> 3),
	P - 127,
	(P - 1) >> 8,
	(P - 1) >> 3,
	(P - 1) >> 4,
	127,
]);

/// Round constants, one row per round.
///
/// Produced by the Grain LFSR of the Poseidon reference parameter scripts with field type prime,
/// power-map S-box, `n = 31`, `t = 16`, `R_F = 8` and `R_P = 13`. Internal rounds read lane 0 only.
#[rustfmt::skip]
pub const ROUND_CONSTANTS: [[u32; WIDTH]; NUM_ROUNDS] = [
	[0x69cbb6af, 0x46ad93f9, 0x60a00f4e, 0x6b1297cd, 0x7a4da371, 0x23189afe, 0x732e7bef, 0x72c246de, 0x2c941900, 0x0557eede, 0x1580496f, 0x3a3ea77b, 0x54f3f271, 0x0f49b029, 0x47872fe1, 0x221e2e36],
	[0x1ab7202e, 0x487779a6, 0x3851c9d8, 0x38dc17c0, 0x209f8849, 0x268dcee8, 0x350c48da, 0x5b9ad32e, 0x0523272b, 0x3f89055b, 0x01e894b2, 0x13ddedde, 0x1b2ef334, 0x7507d8b4, 0x6ceeb94e, 0x52eb6ba2],
	[0x50642905, 0x05453f3f, 0x06349efc, 0x6922787c, 0x04bfff9c, 0x768c714a, 0x3e9ff21a, 0x15737c9c, 0x2229c807, 0x0d47f88c, 0x097e0ecc, 0x27eadba0, 0x2d7d29e4, 0x3502aaa0, 0x0f475fd7, 0x7a5487da],
	[0x29fbda49, 0x018afffd, 0x0315b618, 0x6d4497d1, 0x1b171d9e, 0x52861abd, 0x2e5d0501, 0x3ec8646c, 0x6e5f250a, 0x148ae8e6, 0x17f5fa4a, 0x3e66d284, 0x0051aa3b, 0x483f7913, 0x2cfe5f15, 0x7caf2d68],
	[0x023427ca, 0x2cc78315, 0x1e36ea47, 0x5a8053c0, 0x693be639, 0x3858867d, 0x19334f6b, 0x128f0fd8, 0x4e2b1ccb, 0x61210ce0, 0x3c318939, 0x0b5b2f22, 0x2edb11d5, 0x213effdf, 0x0cac4606, 0x241af16d],
	[0x7290a80d, 0x6f7e5329, 0x598ec8a8, 0x76a859a0, 0x6559e868, 0x657b83af, 0x13271d3f, 0x1f876063, 0x0aeeae37, 0x78bf3f4a, 0x706e9ca6, 0x46400cee, 0x72a05c26, 0x2c589c9e, 0x20bd37a7, 0x6a2d3d10],
	[0x20523767, 0x5b8fe9c4, 0x2aa501d6, 0x1e01ac3e, 0x1448bc54, 0x5ce5ad1c, 0x4918a14d, 0x2c46a83f, 0x4fcf6876, 0x61d8d5c8, 0x6ddf4ff9, 0x11fda4d3, 0x02933a8f, 0x170eaf81, 0x5a9c314f, 0x49a12590],
	[0x35ec52a1, 0x58eb1611, 0x5e481e65, 0x367125c9, 0x0eba33ba, 0x1fc28ded, 0x066399ad, 0x0cbec0ea, 0x75fd1af0, 0x50f5bf4e, 0x643d5f41, 0x6f4fe718, 0x5b3cbbde, 0x1e3afb3e, 0x296fb027, 0x45e1547b],
	[0x7dab9e31, 0x4a8db2ab, 0x59986d19, 0x30bcdfa3, 0x7ab11cac, 0x1db63932, 0x79ac69be, 0x1d7c2824, 0x53b33681, 0x0673b747, 0x038a98a3, 0x2c5bce60, 0x351979cd, 0x5008fb73, 0x547bca78, 0x711af481],
	[0x3f93bf64, 0x644d987b, 0x7922cd26, 0x3c8bcd87, 0x608758b8, 0x0be9313a, 0x7d727af7, 0x21592938, 0x6d39ac05, 0x1cb929e6, 0x7504e146, 0x05bb5b26, 0x1a182621, 0x0129acb7, 0x0f925fd3, 0x615bdcf0],
	[0x4d0686a9, 0x0fd6440c, 0x2a6e7d07, 0x140ea354, 0x06e754ca, 0x0a30ed7d, 0x11d5b9f5, 0x5fd8cb87, 0x34e5a9cd, 0x16dd2e49, 0x4494e08b, 0x23d88c52, 0x3a093d8a, 0x402ac944, 0x46444226, 0x6dc1efa3],
	[0x2f629461, 0x77e0f6c6, 0x21920470, 0x2385c5d2, 0x480374c5, 0x5f570f5f, 0x318e2268, 0x0fc2fdbc, 0x553c94ea, 0x0d8eacbc, 0x43bab284, 0x7b16a066, 0x4fa93dec, 0x4fe114db, 0x656d0ab3, 0x0775f045],
	[0x5ea6c684, 0x04f8447c, 0x68fc16ff, 0x3e0dfdf0, 0x2f8a1d04, 0x61f3951c, 0x2f92cb02, 0x204e8cdb, 0x687c9fdf, 0x3010d096, 0x27c99e66, 0x20984799, 0x59346f8e, 0x76b19839, 0x4e897114, 0x79c50c50],
	[0x32ed764f, 0x097401a4, 0x03b4e414, 0x0ef721be, 0x148d5133, 0x186ff0f3, 0x4683accf, 0x34f4431d, 0x3c930fd8, 0x50ede262, 0x38446cdc, 0x79cb50bf, 0x4b1392b6, 0x280ab5db, 0x09e84fab, 0x4bdc713b],
	[0x083fa00e, 0x5788a978, 0x685349d4, 0x1dac7359, 0x5b9eac2c, 0x72e0224a, 0x72fc6025, 0x0a614c0b, 0x51e74ff3, 0x391598b9, 0x2c54352a, 0x506a28f0, 0x02d04b6d, 0x5a437f70, 0x54d9d369, 0x7990d724],
	[0x5c1f0776, 0x60f55ec1, 0x180ef798, 0x56be67e1, 0x681bc8fc, 0x65ae63c6, 0x240ab256, 0x3e62aaea, 0x46224af5, 0x4eaee2f0, 0x0c09758a, 0x12a973d6, 0x100e9fee, 0x1d7cd264, 0x3d7e3228, 0x259a060e],
	[0x7d988ad4, 0x074a8d27, 0x49620613, 0x52eaea48, 0x63ba465a, 0x008c4f74, 0x61c634cb, 0x2d98b6e6, 0x253bc6a5, 0x3c848dad, 0x540949ea, 0x4f862ddf, 0x5fa93a3d, 0x5c659ba8, 0x0f8b2954, 0x5ac41088],
	[0x770631d1, 0x35f6230e, 0x054e9cf7, 0x74eec058, 0x4c83003e, 0x7e0b160d, 0x570ddeba, 0x6c5e594a, 0x34cf7599, 0x0eb63eb2, 0x713e2dda, 0x6e59941c, 0x19707b6b, 0x129437ef, 0x57c4db39, 0x366cb7ec],
	[0x0e6335de, 0x5e1374ca, 0x7e5054d3, 0x493cf6d2, 0x2ffe3703, 0x19dd3b51, 0x3d64878f, 0x79829832, 0x3ef43ee8, 0x64723e7c, 0x4fe5418a, 0x0f7b671d, 0x3f3adb8c, 0x1830fd89, 0x7b423f94, 0x5b15366e],
	[0x3ca9204d, 0x149cee3c, 0x547bb959, 0x4d6a44a0, 0x771612ca, 0x3f5bdd26, 0x23a3d984, 0x170b07bd, 0x5a2a5094, 0x6e7e68b4, 0x1f3c8320, 0x0ffbb8b6, 0x5ebe7442, 0x45ffc700, 0x64d1f7b6, 0x1b30b661],
	[0x586ea500, 0x503111fd, 0x72b41cf7, 0x6468ad65, 0x64c713b1, 0x450b1ccd, 0x211e6028, 0x300b11ac, 0x74226654, 0x56308a44, 0x7ba4f256, 0x5aa55b4a, 0x52f2bc9a, 0x1a076e50, 0x5eb92894, 0x13baaf6f],
];
