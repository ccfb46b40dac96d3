//! Integration tests for the Omega gateways.
//!
//! Anvil-dependent tests use **testcontainers** to spin up a Docker-based
//! Anvil node automatically.
//!
//! ```bash
//! # Run everything (Docker must be available):
//! cargo test -p omega-integration-tests -- --include-ignored
//! ```

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;
    use std::time::Duration;

    use alloy::primitives::{Address, U256};
    use alloy::rpc::types::TransactionRequest;
    use alloy::signers::local::PrivateKeySigner;
    use omega_core::config::GatewayConfig;
    use omega_core::journal::JournalObserver;
    use omega_evm::{ContractClient, EvmAdapter, GatewayError, TokenGateway};
    use testcontainers::{
        core::{IntoContainerPort, WaitFor},
        runners::SyncRunner,
        Container, GenericImage, ImageExt,
    };

    /// Anvil default account 0.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    /// Spins up a Docker Anvil container and returns `(container, rpc_url)`.
    /// The container is dropped (and removed) when it goes out of scope.
    fn start_anvil() -> (Container<GenericImage>, String) {
        let image = GenericImage::new("ghcr.io/foundry-rs/foundry", "latest")
            .with_exposed_port(8545.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Listening on"))
            .with_entrypoint("anvil")
            .with_cmd(vec![
                "--host".to_string(),
                "0.0.0.0".to_string(),
                "--port".to_string(),
                "8545".to_string(),
                "--chain-id".to_string(),
                "31337".to_string(),
            ]);

        let container = image.start().expect("Docker must be available to run Anvil tests");
        let host_port = container.get_host_port_ipv4(8545).expect("failed to get mapped port");
        let url = format!("http://127.0.0.1:{}", host_port);
        (container, url)
    }

    fn signing_adapter(url: &str) -> EvmAdapter {
        let signer = PrivateKeySigner::from_str(DEV_KEY).unwrap();
        EvmAdapter::with_signer(url, signer)
            .unwrap()
            .with_poll_interval(Duration::from_millis(100))
    }

    #[test]
    fn config_builds_adapter() {
        let config = GatewayConfig::from_yaml("rpc_url: http://127.0.0.1:8545").unwrap();
        let adapter = EvmAdapter::from_config(&config, None).unwrap();
        assert_eq!(adapter.rpc_url(), "http://127.0.0.1:8545");
    }

    // -----------------------------------------------------------------
    // Adapter send + confirmation on Anvil
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn test_send_and_confirm_value_transfer() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let adapter = signing_adapter(&anvil_url);
            let tx = TransactionRequest::default()
                .to(Address::with_last_byte(0x42))
                .value(U256::from(1_000u64));

            let tx_hash = adapter.send(tx).await.expect("anvil should accept the tx");
            let receipt = adapter.wait_for_receipt(tx_hash).await.unwrap();

            assert_eq!(receipt.tx_hash, tx_hash);
            assert!(receipt.success);
            assert!(receipt.block_number.is_some());
        });
    }

    // -----------------------------------------------------------------
    // Gateway against an account without code
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn test_read_from_codeless_address_is_contract_call_error() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let adapter = EvmAdapter::new(&anvil_url).unwrap();
            let token = TokenGateway::new(Address::with_last_byte(0x42), adapter);

            let err = token.decimals().await.unwrap_err();
            match err {
                GatewayError::ContractCall(e) => assert_eq!(e.method, "decimals"),
                other => panic!("unexpected error: {other}"),
            }
        });
    }

    #[test]
    #[ignore]
    fn test_mutation_is_journaled_after_confirmation() {
        let (_anvil, anvil_url) = start_anvil();
        let dir = tempfile::TempDir::new().unwrap();
        let journal_path = dir.path().join("journal.jsonl");

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let journal = Arc::new(JournalObserver::new(&journal_path).unwrap());
            // A call to an account without code succeeds with no effect.
            let token = TokenGateway::new(Address::with_last_byte(0x43), signing_adapter(&anvil_url))
                .with_observer(journal);

            let receipt = token.withdraw_eth(Address::with_last_byte(0x44)).await.unwrap();
            assert!(receipt.success);
        });

        let contents = std::fs::read_to_string(&journal_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"submitted\""));
        assert!(lines[1].contains("\"confirmed\""));
    }
}
