/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for bucket lifecycle operations
pub mod bucket;

/// Types for object upload operations
pub mod upload;

/// Object ACL operations
pub(crate) mod acl;

/// Object download operations
pub(crate) mod download;

/// Object and object-version listing operations
pub(crate) mod list;

/// Object deletion operations
pub(crate) mod delete;

/// Presigned URL generation
pub(crate) mod presign;
