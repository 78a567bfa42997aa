use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;
use crate::sdk::SdkMethod;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Accounts,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/accounts/{stakeAddress}",
    fields: &[Field::StakeAddress],
    non_empty: &[],
    pagination: PaginationStyle::CountPageOrder,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getAccount",
        name: "Get Account",
        description: "Get specific account information",
        pagination: PaginationStyle::None,
        backend: Backend::Sdk(SdkMethod::Accounts),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountRewards",
        name: "Get Account Rewards",
        description: "Get account reward history",
        path: "/accounts/{stakeAddress}/rewards",
        backend: Backend::Sdk(SdkMethod::AccountsRewards),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountHistory",
        name: "Get Account History",
        description: "Get account history",
        path: "/accounts/{stakeAddress}/history",
        backend: Backend::Sdk(SdkMethod::AccountsHistory),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountDelegations",
        name: "Get Account Delegations",
        description: "Get account delegation history",
        path: "/accounts/{stakeAddress}/delegations",
        backend: Backend::Sdk(SdkMethod::AccountsDelegations),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountRegistrations",
        name: "Get Account Registrations",
        description: "Get account registration history",
        path: "/accounts/{stakeAddress}/registrations",
        backend: Backend::Sdk(SdkMethod::AccountsRegistrations),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountWithdrawals",
        name: "Get Account Withdrawals",
        description: "Get account withdrawal history",
        path: "/accounts/{stakeAddress}/withdrawals",
        backend: Backend::Sdk(SdkMethod::AccountsWithdrawals),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountMIRs",
        name: "Get Account MIRs",
        description: "Get account MIR history",
        path: "/accounts/{stakeAddress}/mirs",
        backend: Backend::Sdk(SdkMethod::AccountsMirs),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountAddresses",
        name: "Get Account Addresses",
        description: "Get account associated addresses",
        path: "/accounts/{stakeAddress}/addresses",
        backend: Backend::Sdk(SdkMethod::AccountsAddresses),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountAddressesAssets",
        name: "Get Account Addresses Assets",
        description: "Get assets associated with account addresses",
        path: "/accounts/{stakeAddress}/addresses/assets",
        backend: Backend::Sdk(SdkMethod::AccountsAddressesAssets),
        ..BASE
    },
    OperationDefinition {
        operation: "getAccountAddressesTotal",
        name: "Get Account Addresses Total",
        description: "Get summed details about all addresses of the account",
        path: "/accounts/{stakeAddress}/addresses/total",
        pagination: PaginationStyle::None,
        backend: Backend::Sdk(SdkMethod::AccountsAddressesTotal),
        ..BASE
    },
    OperationDefinition {
        operation: "getUtxos",
        name: "Get Account UTXOs",
        description: "Get UTXOs associated with the account",
        path: "/accounts/{stakeAddress}/utxos",
        backend: Backend::SdkRequest,
        ..BASE
    },
];
