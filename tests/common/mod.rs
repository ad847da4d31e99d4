//! Shared fixtures for the integration suites.

use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;

pub const CARTPOLE_PPO: &str = r#"cartpole-ppo:
  env: CartPole-v1
  run: PPO
  pass_criteria:
    episode_reward_mean: 150.0
  stop:
    episode_reward_mean: 195.0
    timesteps_total: 100000
  config:
    gamma: 0.99
    num_workers: 1
"#;

pub const PONG_A3C: &str = r#"a3c-pongdeterministic-v4:
  env: PongDeterministic-v4
  run: A3C
  stop:
    time_total_s: 3600
  config:
    num_workers: 16
"#;

pub const APP_MANIFEST: &str = r#"base_image: "anyscale/ray-ml:nightly-py38-gpu"
env_vars:
  RLLIB_TEST_NO_JAX_IMPORT: "1"
debian_packages:
  - unzip
python:
  pip_packages:
    - pytest
    - gym
post_build_cmds:
  - pip uninstall -y ray
  - pip install -U {{ env["RAY_WHEELS"] | default("ray") }}
"#;

pub fn write_doc(dir: &TempDir, file_name: &str, content: &str) -> ChildPath {
    let child = dir.child(file_name);
    child.write_str(content).expect("write fixture");
    child
}
