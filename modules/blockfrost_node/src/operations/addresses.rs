use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;
use crate::sdk::SdkMethod;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Addresses,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/addresses/{address}",
    fields: &[Field::Address],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getAddress",
        name: "Get Address",
        description: "Get information about a specific address",
        backend: Backend::Sdk(SdkMethod::Addresses),
        ..BASE
    },
    OperationDefinition {
        operation: "getAddressExtended",
        name: "Get Address Extended",
        description: "Get extended information about a specific address",
        path: "/addresses/{address}/extended",
        backend: Backend::Sdk(SdkMethod::AddressesExtended),
        ..BASE
    },
    OperationDefinition {
        operation: "getAddressTotal",
        name: "Get Address Total",
        description: "Get details about an address summed over its whole history",
        path: "/addresses/{address}/total",
        backend: Backend::Sdk(SdkMethod::AddressesTotal),
        ..BASE
    },
    OperationDefinition {
        operation: "getAddressUtxos",
        name: "Get Address UTXOs",
        description: "Get UTXOs of the address",
        path: "/addresses/{address}/utxos",
        pagination: PaginationStyle::CountPageOrder,
        backend: Backend::Sdk(SdkMethod::AddressesUtxos),
        ..BASE
    },
    OperationDefinition {
        operation: "getAddressUtxosAsset",
        name: "Get Address UTXOs of an Asset",
        description: "Get UTXOs of the address containing a specific asset",
        path: "/addresses/{address}/utxos/{asset}",
        fields: &[Field::Address, Field::Asset],
        non_empty: &[Field::Asset],
        pagination: PaginationStyle::CountPageOrder,
        backend: Backend::SdkRequest,
        ..BASE
    },
    OperationDefinition {
        operation: "getAddressTransactions",
        name: "Get Address Transactions",
        description: "Get transactions involving the address",
        path: "/addresses/{address}/transactions",
        pagination: PaginationStyle::CountPageOrder,
        backend: Backend::Sdk(SdkMethod::AddressesTransactions),
        ..BASE
    },
];
